use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use std::path::{Path, PathBuf};

/// 一次產生作業的參數，建立後不可變
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    name: String,
    module: String,
    output_dir: PathBuf,
}

impl GenerationRequest {
    /// module 為空字串時沿用 name
    pub fn new(
        name: impl Into<String>,
        module: impl Into<String>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        let name = name.into();
        let module = module.into();
        let module = if module.is_empty() { name.clone() } else { module };
        Self {
            name,
            module,
            output_dir: output_dir.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl Validate for GenerationRequest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_path("output", &self.output_dir.to_string_lossy())
    }
}

/// 外部程式呼叫：程式名稱與參數，工作目錄固定為輸出目錄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolInvocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
}

impl RenderedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Makefile that may already hold targets from an earlier `project init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakefilePlan {
    pub path: PathBuf,
    /// Written when no Makefile exists yet.
    pub full_template: String,
    /// Appended when the Makefile exists but lacks `marker`.
    pub fragment: String,
    pub marker: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    CreateDirs(Vec<PathBuf>),
    WriteFiles(Vec<RenderedFile>),
    MergeMakefile(MakefilePlan),
    Exec(ToolInvocation),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub label: &'static str,
    pub action: StepAction,
}

impl Step {
    pub fn new(label: &'static str, action: StepAction) -> Self {
        Self { label, action }
    }
}

/// `generate()` 成功後的摘要
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub completed_steps: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_defaults_to_name() {
        let request = GenerationRequest::new("demo", "", "./demo");
        assert_eq!(request.module(), "demo");
        assert_eq!(request.output_dir(), Path::new("./demo"));
    }

    #[test]
    fn test_explicit_module_is_kept() {
        let request = GenerationRequest::new("user", "github.com/org/user", ".");
        assert_eq!(request.name(), "user");
        assert_eq!(request.module(), "github.com/org/user");
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        assert!(GenerationRequest::new("", "", "x").validate().is_err());
        assert!(GenerationRequest::new("demo", "", "").validate().is_err());
        assert!(GenerationRequest::new("demo", "", "demo").validate().is_ok());
    }
}
