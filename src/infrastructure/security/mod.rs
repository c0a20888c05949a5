//! Security integrations: the authentication subsystem's session registry.

pub mod in_memory;

pub use in_memory::{Authority, InMemorySessionRegistry};
