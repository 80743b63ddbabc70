use crate::domain::model::{GenerationRequest, Step, ToolInvocation};
use crate::utils::error::Result;
use std::path::Path;

/// 以輸出目錄為根的檔案系統操作，路徑皆為相對路徑
pub trait Storage {
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    /// Truncates an existing file. Parent directories are not created.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
    /// Fails when the file does not exist.
    fn append_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait CommandRunner {
    /// 同步執行並等待結束，子程序的 stdout/stderr 不轉發
    fn run(&self, invocation: &ToolInvocation, working_dir: &Path) -> Result<()>;
}

pub trait Generator {
    /// Human-readable kind, used in log lines.
    fn kind(&self) -> &'static str;
    fn request(&self) -> &GenerationRequest;
    /// Fixed, ordered step list. Later steps rely on earlier ones.
    fn steps(&self) -> Vec<Step>;
}
