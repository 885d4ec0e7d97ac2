use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// 「下載」到本機目錄
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

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(full_path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested/exports");
        let storage = LocalStorage::new(base.to_str().unwrap().to_string());

        let path = storage.write_file("a.csv", b"data").await.unwrap();

        assert!(path.ends_with("a.csv"));
        assert_eq!(std::fs::read(base.join("a.csv")).unwrap(), b"data");
    }

    #[tokio::test]
    async fn test_write_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage.write_file("a.csv", b"first").await.unwrap();
        let path = storage.write_file("a.csv", b"second").await.unwrap();

        assert_eq!(std::fs::read(path).unwrap(), b"second");
    }
}
