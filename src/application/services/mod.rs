//! Business logic services orchestrating the stores.

pub mod account_service;
pub mod registration_service;
pub mod stats_service;

pub use account_service::AccountService;
pub use registration_service::RegistrationService;
pub use stats_service::StatsService;
