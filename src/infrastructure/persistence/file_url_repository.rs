//! File-backed implementation of the registered URL repository.

use std::path::PathBuf;

use async_trait::async_trait;

use super::file_store::FileStore;
use crate::domain::entities::RegisteredUrl;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Registered URL store over a [`FileStore`].
pub struct FileUrlRepository {
    store: FileStore<RegisteredUrl>,
}

impl FileUrlRepository {
    /// Opens the URL store rooted at `root`, creating the directory if
    /// absent.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        Ok(Self {
            store: FileStore::open(root)?,
        })
    }
}

#[async_trait]
impl UrlRepository for FileUrlRepository {
    async fn create(&self, url: &RegisteredUrl) -> Result<(), AppError> {
        self.store.create(url)
    }

    async fn read(&self, id: &str) -> Result<Option<RegisteredUrl>, AppError> {
        self.store.read(id)
    }

    async fn update(&self, url: &RegisteredUrl) -> Result<bool, AppError> {
        self.store.update(url)
    }

    async fn delete(&self, url: &RegisteredUrl) -> Result<bool, AppError> {
        self.store.delete(url)
    }

    async fn list(&self) -> Result<Vec<RegisteredUrl>, AppError> {
        self.store.iter()?.collect()
    }
}
