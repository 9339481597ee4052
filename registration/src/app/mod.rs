//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, rules and ports.

pub mod user_service;

pub use user_service::{RegistrationDecision, RejectionReason, UserService};
