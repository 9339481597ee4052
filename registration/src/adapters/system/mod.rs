//! Host system adapters

pub mod clock;

pub use clock::SystemClock;
