//! Clock port
//!
//! Supplies the current calendar date for age checks.

use chrono::NaiveDate;

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
