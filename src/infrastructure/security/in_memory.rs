//! In-memory session registry backing HTTP Basic authentication.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::domain::entities::Account;
use crate::domain::repositories::SessionRegistry;

/// Authorities granted to authenticated accounts.
///
/// Every registered session receives both; they are kept separate so the
/// adapter can guard each endpoint group by the authority it requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Authority {
    /// Permission to register URLs.
    Register,
    /// Permission to retrieve account statistics.
    StatRetrieval,
}

/// A registered session: hashed credentials plus granted authorities.
#[derive(Debug, Clone)]
struct Session {
    credential_hash: String,
    authorities: HashSet<Authority>,
}

/// Process-wide session registry.
///
/// Credentials are stored as SHA-256 digests, never in clear text. The
/// registry is not durable: [`FileAccountRepository`] rebuilds it at startup
/// by iterating every persisted account and keeps it synchronized on every
/// account mutation. It is an explicit injected dependency with a process
/// lifecycle, initialized once at startup.
///
/// [`FileAccountRepository`]: crate::infrastructure::persistence::FileAccountRepository
#[derive(Debug)]
pub struct InMemorySessionRegistry {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Verifies Basic-auth credentials against the stored digest.
    pub fn verify(&self, account_id: &str, password: &str) -> bool {
        let sessions = self.sessions.read().expect("session registry lock poisoned");
        sessions
            .get(account_id)
            .is_some_and(|session| session.credential_hash == hash_credential(password))
    }

    /// Returns true when the account holds the given authority.
    pub fn has_authority(&self, account_id: &str, authority: Authority) -> bool {
        let sessions = self.sessions.read().expect("session registry lock poisoned");
        sessions
            .get(account_id)
            .is_some_and(|session| session.authorities.contains(&authority))
    }

    /// Returns true when a session is registered for the id.
    pub fn contains(&self, account_id: &str) -> bool {
        let sessions = self.sessions.read().expect("session registry lock poisoned");
        sessions.contains_key(account_id)
    }

    /// Number of currently registered sessions.
    pub fn session_count(&self) -> usize {
        let sessions = self.sessions.read().expect("session registry lock poisoned");
        sessions.len()
    }
}

impl Default for InMemorySessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRegistry for InMemorySessionRegistry {
    fn register_session(&self, account: &Account) {
        let mut sessions = self.sessions.write().expect("session registry lock poisoned");

        // Idempotent by id: refreshing an already registered session is a
        // no-op, so store reads may re-register freely.
        if sessions.contains_key(&account.id) {
            return;
        }

        sessions.insert(
            account.id.clone(),
            Session {
                credential_hash: hash_credential(&account.password),
                authorities: HashSet::from([Authority::Register, Authority::StatRetrieval]),
            },
        );
        debug!("Session registered for account <{}>", account.id);
    }

    fn revoke_session(&self, account_id: &str) {
        let mut sessions = self.sessions.write().expect("session registry lock poisoned");
        if sessions.remove(account_id).is_some() {
            debug!("Session revoked for account <{}>", account_id);
        }
    }
}

fn hash_credential(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(account: &Account) -> InMemorySessionRegistry {
        let registry = InMemorySessionRegistry::new();
        registry.register_session(account);
        registry
    }

    #[test]
    fn test_register_and_verify() {
        let account = Account::new("alice", "s3cretpw");
        let registry = registry_with(&account);

        assert!(registry.verify("alice", "s3cretpw"));
        assert!(!registry.verify("alice", "wrong"));
        assert!(!registry.verify("bob", "s3cretpw"));
    }

    #[test]
    fn test_register_is_idempotent_by_id() {
        let account = Account::new("alice", "s3cretpw");
        let registry = registry_with(&account);

        // A second registration with different credentials does not replace
        // the existing session.
        registry.register_session(&Account::new("alice", "other"));

        assert!(registry.verify("alice", "s3cretpw"));
        assert!(!registry.verify("alice", "other"));
        assert_eq!(registry.session_count(), 1);
    }

    #[test]
    fn test_revoke_removes_session() {
        let account = Account::new("alice", "s3cretpw");
        let registry = registry_with(&account);

        registry.revoke_session("alice");

        assert!(!registry.contains("alice"));
        assert!(!registry.verify("alice", "s3cretpw"));
    }

    #[test]
    fn test_revoke_unknown_is_noop() {
        let registry = InMemorySessionRegistry::new();
        registry.revoke_session("ghost");
        assert_eq!(registry.session_count(), 0);
    }

    #[test]
    fn test_every_session_gets_both_authorities() {
        let account = Account::new("alice", "s3cretpw");
        let registry = registry_with(&account);

        assert!(registry.has_authority("alice", Authority::Register));
        assert!(registry.has_authority("alice", Authority::StatRetrieval));
        assert!(!registry.has_authority("ghost", Authority::Register));
    }

    #[test]
    fn test_credentials_are_not_stored_in_clear() {
        let account = Account::new("alice", "s3cretpw");
        let registry = registry_with(&account);

        let sessions = registry.sessions.read().unwrap();
        let session = sessions.get("alice").unwrap();
        assert_ne!(session.credential_hash, "s3cretpw");
        assert_eq!(session.credential_hash.len(), 64);
    }
}
