//! Request and response DTOs for the REST surface.

pub mod account;
pub mod health;
pub mod register;
