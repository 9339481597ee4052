//! Credit scoring port

use chrono::NaiveDate;

use crate::error::DomainError;

/// Computes the base credit limit of a prospective user
pub trait CreditScorer: Send + Sync {
    /// Base limit before any client tier adjustment
    fn credit_limit(&self, last_name: &str, date_of_birth: NaiveDate) -> Result<i64, DomainError>;
}
