//! User registration
//!
//! Validates new users against name, email, age and credit rules before
//! handing them to a user repository. Uses hexagonal (ports & adapters)
//! architecture: the service only sees the port traits in `domain::ports`.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
mod test_utils;


pub use app::{RegistrationDecision, RejectionReason, UserService};
pub use domain::entities::{Client, ClientCategory, ClientId, CreditLimit, User};
pub use error::{ConfigError, DomainError};
