use crate::domain::ports::Storage;
use crate::utils::error::{Result, StatError};
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
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);
        let display_path = full_path.display().to_string();
        let write_error = |source: std::io::Error| StatError::FileWriteError {
            path: display_path.clone(),
            source,
        };

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        // 一次寫入整份內容
        fs::write(&full_path, data).map_err(write_error)?;
        Ok(display_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("series").to_str().unwrap().to_string();
        let storage = LocalStorage::new(base);

        let path = storage
            .write_file("date_years.dat", b"# date 1950 ---> 1950\n1950\t3\n")
            .await
            .unwrap();

        assert!(path.ends_with("date_years.dat"));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "# date 1950 ---> 1950\n1950\t3\n");
    }

    #[tokio::test]
    async fn test_write_failure_is_file_write_error() {
        let temp_dir = TempDir::new().unwrap();
        // 以一般檔案當作目錄，必定失敗
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();

        let storage = LocalStorage::new(blocker.to_str().unwrap().to_string());
        let err = storage.write_file("date_years.dat", b"x").await.unwrap_err();
        assert!(matches!(err, StatError::FileWriteError { .. }));
    }
}
