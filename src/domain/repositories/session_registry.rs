//! Contract with the authentication subsystem's session registry.

use crate::domain::entities::Account;

/// Registry of authentication sessions, keyed by account id.
///
/// The registry itself is not durable: the account store rebuilds it at
/// startup by iterating every persisted account, and keeps it synchronized on
/// every account mutation thereafter. Both operations are idempotent by
/// account id, so refreshing an already registered session is safe.
///
/// # Implementations
///
/// - [`crate::infrastructure::security::InMemorySessionRegistry`] -
///   process-wide in-memory registry backing HTTP Basic authentication
#[cfg_attr(test, mockall::automock)]
pub trait SessionRegistry: Send + Sync {
    /// Registers a session for the account.
    ///
    /// No-op when a session for the id already exists.
    fn register_session(&self, account: &Account);

    /// Removes any session registered for the id.
    ///
    /// No-op when no session exists.
    fn revoke_session(&self, account_id: &str);
}
