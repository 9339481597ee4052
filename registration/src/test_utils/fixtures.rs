//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::NaiveDate;

use crate::domain::entities::{Client, ClientCategory, CreditLimit, User};

/// The date every `FixedClock` in the unit tests reports
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// A birth date comfortably above the minimum age on `test_today()`
pub fn adult_date_of_birth() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
}

/// Create a test client with ID 1 and the given category
pub fn test_client(category: ClientCategory) -> Client {
    Client::new(1, category)
}

/// Create a stored-ready user for a regular client
pub fn test_user() -> User {
    User {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john.doe@gmail.com".to_string(),
        date_of_birth: adult_date_of_birth(),
        client: test_client(ClientCategory::Regular),
        credit_limit: CreditLimit::Applies(700),
    }
}
