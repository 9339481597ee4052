//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mocks count their calls so tests can assert which collaborators a
//! registration reached, and each has a `failing()` constructor for the
//! error paths.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
