use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("directory {} already exists", path.display())]
    TargetExists { path: PathBuf },

    #[error("{action} {}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start {program}")]
    ToolSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} {} failed: {status}", args.join(" "))]
    ToolFailed {
        program: String,
        args: Vec<String>,
        status: ExitStatus,
    },

    #[error("{label}")]
    Step {
        label: String,
        #[source]
        source: Box<ScaffoldError>,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Precondition,
    Filesystem,
    ExternalTool,
    Configuration,
}

impl ScaffoldError {
    pub fn filesystem(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }

    /// 取得最內層的錯誤（穿透 Step 包裝）
    pub fn root_cause(&self) -> &ScaffoldError {
        match self {
            Self::Step { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// 失敗步驟的標籤，若錯誤不是來自步驟則為 None
    pub fn step_label(&self) -> Option<&str> {
        match self {
            Self::Step { label, .. } => Some(label),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Step { source, .. } => source.category(),
            Self::TargetExists { .. } => ErrorCategory::Precondition,
            Self::Filesystem { .. } => ErrorCategory::Filesystem,
            Self::ToolSpawn { .. } | Self::ToolFailed { .. } => ErrorCategory::ExternalTool,
            Self::Config { .. } | Self::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Step { source, .. } => source.recovery_suggestion(),
            Self::TargetExists { .. } => {
                "Pick another --output directory or remove the existing one"
            }
            Self::Filesystem { .. } => {
                "Check permissions and free space; partial output is left in place"
            }
            Self::ToolSpawn { .. } => "Make sure the toolchain binary is installed and on PATH",
            Self::ToolFailed { .. } => {
                "Re-run the failed command by hand in the output directory to see its output"
            }
            Self::Config { .. } | Self::InvalidConfigValue { .. } => {
                "Fix the configuration file or command-line arguments"
            }
        }
    }

    /// 將整條錯誤鏈以 ": " 串接
    /// 例如 `Creating directories: create directory x: permission denied`
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut current = std::error::Error::source(self);
        while let Some(cause) = current {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            current = cause.source();
        }
        message
    }

    pub fn user_friendly_message(&self) -> String {
        match self.step_label() {
            Some(label) => format!("Step '{}' failed: {}", label, self.root_cause().report()),
            None => self.report(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
