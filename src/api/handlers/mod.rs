//! REST API handlers.

pub mod account;
pub mod health;
pub mod redirect;
pub mod register;
pub mod stats;

pub use account::{create_account_handler, delete_account_handler};
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use register::register_url_handler;
pub use stats::statistics_handler;
