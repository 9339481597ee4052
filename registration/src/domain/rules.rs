//! Registration rules
//!
//! Thresholds and pure checks applied by the registration service.

use chrono::{Datelike, NaiveDate};

use super::entities::{ClientCategory, CreditLimit};

/// Minimum age in full years
pub const MINIMUM_AGE: i32 = 21;

/// Lowest credit limit accepted when a limit applies
pub const MINIMUM_CREDIT_LIMIT: i64 = 500;

/// Base limit multiplier for important clients
pub const IMPORTANT_CLIENT_MULTIPLIER: i64 = 2;

/// Both names must be non-empty
pub fn has_full_name(first_name: &str, last_name: &str) -> bool {
    !first_name.is_empty() && !last_name.is_empty()
}

/// Only checks that `@` and `.` both appear somewhere in the address.
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// Full years elapsed between `date_of_birth` and `today`.
///
/// Negative when the birth date lies in the future.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age - 1
    } else {
        age
    }
}

pub fn is_of_age(age: i32) -> bool {
    age >= MINIMUM_AGE
}

/// Effective credit limit for a client category.
///
/// `base` is only called for categories that carry a limit.
pub fn credit_limit_for<E>(
    category: ClientCategory,
    base: impl FnOnce() -> Result<i64, E>,
) -> Result<CreditLimit, E> {
    let limit = match category {
        ClientCategory::VeryImportant => CreditLimit::NotApplicable,
        ClientCategory::Important => {
            CreditLimit::Applies(base()?.saturating_mul(IMPORTANT_CLIENT_MULTIPLIER))
        }
        ClientCategory::Regular => CreditLimit::Applies(base()?),
    };
    Ok(limit)
}

/// The applied limit when it falls below `MINIMUM_CREDIT_LIMIT`.
pub fn insufficient_credit(limit: CreditLimit) -> Option<i64> {
    match limit {
        CreditLimit::Applies(amount) if amount < MINIMUM_CREDIT_LIMIT => Some(amount),
        _ => None,
    }
}
