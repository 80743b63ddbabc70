use crate::domain::ports::Storage;
use crate::utils::error::{Result, ScaffoldError};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn full_path(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let full_path = self.full_path(path);
        tracing::debug!("mkdir -p {}", full_path.display());
        fs::create_dir_all(&full_path)
            .map_err(|e| ScaffoldError::filesystem("create directory", full_path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        fs::metadata(self.full_path(path)).is_ok()
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let full_path = self.full_path(path);
        fs::read(&full_path).map_err(|e| ScaffoldError::filesystem("read", full_path, e))
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);
        tracing::debug!("write {} ({} bytes)", full_path.display(), data.len());
        fs::write(&full_path, data).map_err(|e| ScaffoldError::filesystem("write", full_path, e))
    }

    fn append_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);
        tracing::debug!("append {} ({} bytes)", full_path.display(), data.len());
        let mut file = OpenOptions::new()
            .append(true)
            .open(&full_path)
            .map_err(|e| ScaffoldError::filesystem("open", full_path.clone(), e))?;
        file.write_all(data)
            .map_err(|e| ScaffoldError::filesystem("append to", full_path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_dir_all_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.create_dir_all(Path::new("a/b/c")).unwrap();
        storage.create_dir_all(Path::new("a/b/c")).unwrap();

        assert!(temp_dir.path().join("a/b/c").is_dir());
    }

    #[test]
    fn test_write_file_does_not_create_parents() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        let err = storage
            .write_file(Path::new("missing/file.txt"), b"x")
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Filesystem { action: "write", .. }));
    }

    #[test]
    fn test_write_overwrites_and_append_extends() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());
        let path = Path::new("Makefile");

        storage.write_file(path, b"old content").unwrap();
        storage.write_file(path, b"first\n").unwrap();
        storage.append_file(path, b"second\n").unwrap();

        assert_eq!(storage.read_file(path).unwrap(), b"first\nsecond\n");
        assert!(storage.exists(path));
    }

    #[test]
    fn test_append_requires_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        assert!(storage.append_file(Path::new("nope"), b"x").is_err());
        assert!(!storage.exists(Path::new("nope")));
    }
}
