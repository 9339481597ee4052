//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod json;
pub mod system;

pub use json::{CreditTable, JsonClientRepository, JsonCreditScorer, JsonLinesUserRepository};
pub use system::SystemClock;
