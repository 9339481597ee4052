//! JSON file adapters
//!
//! File-backed implementations of the port traits, used by the
//! `register-user` binary.

pub mod client_repo;
pub mod credit_scorer;
pub mod user_repo;

pub use client_repo::JsonClientRepository;
pub use credit_scorer::{CreditTable, JsonCreditScorer};
pub use user_repo::JsonLinesUserRepository;
