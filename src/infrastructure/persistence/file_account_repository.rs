//! File-backed implementation of the account repository.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::file_store::FileStore;
use crate::domain::entities::Account;
use crate::domain::repositories::{AccountRepository, SessionRegistry};
use crate::error::AppError;

/// Account store that keeps the session registry synchronized.
///
/// Wraps a [`FileStore`] of accounts and notifies the registry on every
/// read/create/update, and revokes the session on delete. Opening the store
/// iterates all persisted accounts and registers each, rebuilding
/// authentication state after a restart — the registry itself is not durable.
#[derive(Debug)]
pub struct FileAccountRepository<S> {
    store: FileStore<Account>,
    sessions: Arc<S>,
}

impl<S: SessionRegistry> FileAccountRepository<S> {
    /// Opens the account store rooted at `root` and warms the session
    /// registry from every persisted account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the directory cannot be created
    /// or scanned, and [`AppError::Corruption`] when a persisted account can
    /// no longer be deserialized.
    pub fn open(root: impl Into<PathBuf>, sessions: Arc<S>) -> Result<Self, AppError> {
        let store = FileStore::open(root)?;

        let mut restored = 0usize;
        for account in store.iter()? {
            sessions.register_session(&account?);
            restored += 1;
        }
        if restored > 0 {
            info!("Restored {} account session(s) from disk", restored);
        }

        Ok(Self { store, sessions })
    }
}

#[async_trait]
impl<S: SessionRegistry> AccountRepository for FileAccountRepository<S> {
    async fn create(&self, account: &Account) -> Result<(), AppError> {
        self.store.create(account)?;
        self.sessions.register_session(account);
        Ok(())
    }

    async fn read(&self, id: &str) -> Result<Option<Account>, AppError> {
        let account = self.store.read(id)?;
        if let Some(ref account) = account {
            // Idempotent refresh: guards against registry/store drift, e.g.
            // when the record was just rehydrated from disk after a miss.
            self.sessions.register_session(account);
        }
        Ok(account)
    }

    async fn update(&self, account: &Account) -> Result<bool, AppError> {
        if !self.store.update(account)? {
            return Ok(false);
        }

        // Re-register with current data so credential changes take effect.
        self.sessions.revoke_session(&account.id);
        self.sessions.register_session(account);
        Ok(true)
    }

    async fn delete(&self, account: &Account) -> Result<bool, AppError> {
        if !self.store.delete(account)? {
            return Ok(false);
        }

        self.sessions.revoke_session(&account.id);
        Ok(true)
    }

    async fn list(&self) -> Result<Vec<Account>, AppError> {
        self.store.iter()?.collect()
    }
}
