//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access behind the Repository pattern; concrete
//! implementations live in `crate::infrastructure`.
//!
//! # Available Contracts
//!
//! - [`AccountRepository`] - Account CRUD operations
//! - [`UrlRepository`] - Registered URL CRUD operations
//! - [`SessionRegistry`] - Authentication session synchronization
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` for unit tests; see
//! integration tests in `tests/repository_*.rs` for usage of the real
//! file-backed implementations.

pub mod account_repository;
pub mod session_registry;
pub mod url_repository;

pub use account_repository::AccountRepository;
pub use session_registry::SessionRegistry;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use session_registry::MockSessionRegistry;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
