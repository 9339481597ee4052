//! User domain entity
//!
//! The candidate record built by a registration. It only exists once the
//! name, email and age checks have passed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::client::Client;

/// Whether a credit limit applies to a user, and its amount when it does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "amount")]
pub enum CreditLimit {
    /// No limit is enforced (very important clients)
    NotApplicable,
    Applies(i64),
}

impl CreditLimit {
    pub fn applies(&self) -> bool {
        matches!(self, CreditLimit::Applies(_))
    }

    /// The enforced amount, if any
    pub fn amount(&self) -> Option<i64> {
        match self {
            CreditLimit::NotApplicable => None,
            CreditLimit::Applies(amount) => Some(*amount),
        }
    }
}

impl std::fmt::Display for CreditLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreditLimit::NotApplicable => write!(f, "none"),
            CreditLimit::Applies(amount) => write!(f, "{}", amount),
        }
    }
}

/// A user that passed every registration check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub client: Client,
    pub credit_limit: CreditLimit,
}

impl User {
    pub fn has_credit_limit(&self) -> bool {
        self.credit_limit.applies()
    }
}

/// Data collected before the credit limit is known
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
}

impl NewUser {
    pub fn with_credit(self, client: Client, credit_limit: CreditLimit) -> User {
        User {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            date_of_birth: self.date_of_birth,
            client,
            credit_limit,
        }
    }
}
