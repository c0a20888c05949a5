//! Repository trait for registered URL data access.

use crate::domain::entities::RegisteredUrl;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing registered URLs.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileUrlRepository`] - file-backed
///   implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new registered URL record.
    ///
    /// Overwrites silently if the id is already present. Ids are
    /// system-generated and probed for uniqueness before this is called.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the record cannot be persisted.
    async fn create(&self, url: &RegisteredUrl) -> Result<(), AppError>;

    /// Finds a registered URL by its short id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(RegisteredUrl))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Corruption`] when a stored record exists but can
    /// no longer be deserialized.
    async fn read(&self, id: &str) -> Result<Option<RegisteredUrl>, AppError>;

    /// Replaces an existing registered URL record.
    ///
    /// Returns `Ok(false)` when no record with the same id exists. URLs are
    /// immutable in the normal flow; the operation exists for store
    /// completeness.
    async fn update(&self, url: &RegisteredUrl) -> Result<bool, AppError>;

    /// Deletes a registered URL record.
    ///
    /// Returns `Ok(true)` when the id was present in cache or on disk,
    /// `Ok(false)` otherwise.
    async fn delete(&self, url: &RegisteredUrl) -> Result<bool, AppError>;

    /// Returns every persisted registered URL.
    async fn list(&self) -> Result<Vec<RegisteredUrl>, AppError>;
}
