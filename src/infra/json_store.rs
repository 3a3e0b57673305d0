use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::domain::model::book::Book;
use crate::domain::repository::CatalogRepository;

/// 保存先ファイルの既定名（カレントディレクトリ相対）
pub const DEFAULT_CATALOG_FILE: &str = "books.json";

#[derive(Debug, thiserror::Error)]
pub enum JsonStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSONファイルによるCatalogRepository実装。
/// 1 Catalog = 1 JSONファイル（Bookの配列）。
#[derive(Debug, Clone)]
pub struct JsonCatalogRepository {
    path: PathBuf,
}

impl Default for JsonCatalogRepository {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_FILE)
    }
}

impl JsonCatalogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_tmp(tmp: &Path, books: &[Book]) -> Result<(), JsonStoreError> {
        let mut writer = BufWriter::new(File::create(tmp)?);
        serde_json::to_writer_pretty(&mut writer, books)?;
        writer.write_all(b"\n")?;
        writer.into_inner().map_err(|e| e.into_error())?.sync_all()?;
        Ok(())
    }
}

impl CatalogRepository for JsonCatalogRepository {
    type Error = JsonStoreError;

    fn load(&self) -> Result<Option<Vec<Book>>, Self::Error> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let books: Vec<Book> = serde_json::from_str(&content)?;
        Ok(Some(books))
    }

    fn save(&self, books: &[Book]) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        let result = Self::write_tmp(&tmp, books)
            .and_then(|()| std::fs::rename(&tmp, &self.path).map_err(JsonStoreError::from));
        if result.is_err() {
            let _ = std::fs::remove_file(&tmp);
        }
        result
    }
}
