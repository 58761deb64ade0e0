use crate::domain::ports::Storage;
use crate::utils::error::{OrderError, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);
        fs::read_to_string(&full_path).map_err(|source| OrderError::FileAccessError {
            path: full_path.display().to_string(),
            source,
        })
    }

    /// Truncates any existing file.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);
        let shown = full_path.display().to_string();

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|source| OrderError::FileAccessError {
                path: shown.clone(),
                source,
            })?;
        }

        fs::write(&full_path, data).map_err(|source| OrderError::FileAccessError {
            path: shown.clone(),
            source,
        })?;
        Ok(shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage.write_file("invoice.txt", b"first order").unwrap();
        let written = storage.write_file("invoice.txt", b"second").unwrap();

        assert!(written.ends_with("invoice.txt"));
        assert_eq!(storage.read_file("invoice.txt").unwrap(), "second");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        let err = storage.read_file("drivers.txt").unwrap_err();
        match err {
            OrderError::FileAccessError { path, .. } => assert!(path.ends_with("drivers.txt")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
