//! Domain entities
//!
//! Pure domain models for clients and the users registered under them.

pub mod client;
pub mod user;

pub use client::{Client, ClientCategory, ClientId};
pub use user::{CreditLimit, NewUser, User};
