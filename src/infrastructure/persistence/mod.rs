//! File-backed persistence: one JSON record per file, cached in memory.

pub mod file_account_repository;
pub mod file_store;
pub mod file_url_repository;

pub use file_account_repository::FileAccountRepository;
pub use file_store::{FileStore, RecordIter};
pub use file_url_repository::FileUrlRepository;
