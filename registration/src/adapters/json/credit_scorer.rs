//! JSON file adapter for CreditScorer

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::ports::CreditScorer;
use crate::error::DomainError;

/// Table of base credit limits keyed by last name
#[derive(Debug, Clone, Deserialize)]
pub struct CreditTable {
    /// Limit for last names without an entry
    pub default_limit: i64,
    #[serde(default)]
    pub limits: HashMap<String, i64>,
}

/// Credit scorer backed by a static lookup table
///
/// Last names are matched exactly. The date of birth does not affect the
/// result.
pub struct JsonCreditScorer {
    table: CreditTable,
}

impl JsonCreditScorer {
    /// Expected format: `{"default_limit": 700, "limits": {"Smith": 300}}`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let table: CreditTable = serde_json::from_str(&raw)?;
        tracing::debug!(
            entries = table.limits.len(),
            default_limit = table.default_limit,
            "Loaded credit table"
        );
        Ok(Self::new(table))
    }

    pub fn new(table: CreditTable) -> Self {
        Self { table }
    }
}

impl CreditScorer for JsonCreditScorer {
    fn credit_limit(&self, last_name: &str, _date_of_birth: NaiveDate) -> Result<i64, DomainError> {
        Ok(self
            .table
            .limits
            .get(last_name)
            .copied()
            .unwrap_or(self.table.default_limit))
    }
}
