use crate::core::{CommandRunner, StepAction, Storage};
use crate::domain::model::{MakefilePlan, RenderedFile, ToolInvocation};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// What the merge-aware Makefile step does with what is already on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MakefileMerge {
    /// No Makefile yet: write the full template.
    WriteFull,
    /// Marker target already present: leave the file untouched.
    Skip,
    /// Makefile without the marker target: append the fragment.
    Append,
}

/// `existing` 為 None 表示檔案不存在；marker 為字面比對
pub fn plan_makefile_merge(existing: Option<&[u8]>, marker: &str) -> MakefileMerge {
    match existing {
        None => MakefileMerge::WriteFull,
        Some(content) if String::from_utf8_lossy(content).contains(marker) => MakefileMerge::Skip,
        Some(_) => MakefileMerge::Append,
    }
}

pub struct StepExecutor<'a, S: Storage, R: CommandRunner> {
    storage: &'a S,
    runner: &'a R,
    working_dir: &'a Path,
}

impl<'a, S: Storage, R: CommandRunner> StepExecutor<'a, S, R> {
    pub fn new(storage: &'a S, runner: &'a R, working_dir: &'a Path) -> Self {
        Self {
            storage,
            runner,
            working_dir,
        }
    }

    pub fn execute(&self, action: &StepAction) -> Result<()> {
        match action {
            StepAction::CreateDirs(dirs) => self.create_dirs(dirs),
            StepAction::WriteFiles(files) => self.write_files(files),
            StepAction::MergeMakefile(plan) => self.merge_makefile(plan).map(|_| ()),
            StepAction::Exec(invocation) => self.exec(invocation),
        }
    }

    fn create_dirs(&self, dirs: &[PathBuf]) -> Result<()> {
        for dir in dirs {
            self.storage.create_dir_all(dir)?;
        }
        Ok(())
    }

    fn write_files(&self, files: &[RenderedFile]) -> Result<()> {
        for file in files {
            self.storage.write_file(&file.path, file.content.as_bytes())?;
        }
        Ok(())
    }

    pub fn merge_makefile(&self, plan: &MakefilePlan) -> Result<MakefileMerge> {
        let existing = if self.storage.exists(&plan.path) {
            Some(self.storage.read_file(&plan.path)?)
        } else {
            None
        };

        let decision = plan_makefile_merge(existing.as_deref(), &plan.marker);
        tracing::debug!("{}: {:?}", plan.path.display(), decision);

        match decision {
            MakefileMerge::WriteFull => self
                .storage
                .write_file(&plan.path, plan.full_template.as_bytes())?,
            MakefileMerge::Skip => {}
            MakefileMerge::Append => self
                .storage
                .append_file(&plan.path, plan.fragment.as_bytes())?,
        }
        Ok(decision)
    }

    fn exec(&self, invocation: &ToolInvocation) -> Result<()> {
        self.runner.run(invocation, self.working_dir)
    }
}
