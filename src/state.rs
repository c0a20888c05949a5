//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AccountService, RegistrationService, StatsService};
use crate::infrastructure::persistence::{FileAccountRepository, FileUrlRepository};
use crate::infrastructure::security::InMemorySessionRegistry;

/// The account repository wired with the process-wide session registry.
pub type SharedAccountRepository = FileAccountRepository<InMemorySessionRegistry>;

#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService<SharedAccountRepository, FileUrlRepository>>,
    pub registrations: Arc<RegistrationService<SharedAccountRepository, FileUrlRepository>>,
    pub stats: Arc<StatsService<SharedAccountRepository, FileUrlRepository>>,
    pub sessions: Arc<InMemorySessionRegistry>,
    /// Base URL prefixed to generated short ids in registration responses.
    pub base_url: String,
}

impl AppState {
    /// Builds the service graph over the given stores and registry.
    pub fn new(
        account_repository: Arc<SharedAccountRepository>,
        url_repository: Arc<FileUrlRepository>,
        sessions: Arc<InMemorySessionRegistry>,
        base_url: String,
    ) -> Self {
        Self {
            accounts: Arc::new(AccountService::new(
                account_repository.clone(),
                url_repository.clone(),
            )),
            registrations: Arc::new(RegistrationService::new(
                account_repository.clone(),
                url_repository.clone(),
            )),
            stats: Arc::new(StatsService::new(account_repository, url_repository)),
            sessions,
            base_url,
        }
    }
}
