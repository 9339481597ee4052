//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They record how they were called so tests can verify behavior.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::domain::entities::{Client, ClientId, User};
use crate::domain::ports::{ClientRepository, Clock, CreditScorer, UserRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Client Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryClientRepository {
    clients: RwLock<HashMap<ClientId, Client>>,
    lookups: AtomicUsize,
    fail: bool,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every lookup fails with a storage error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a client for testing
    pub fn with_client(self, client: Client) -> Self {
        self.clients.write().unwrap().insert(client.id, client);
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ClientRepository for InMemoryClientRepository {
    fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DomainError::Storage("client directory unavailable".to_string()));
        }
        Ok(self.clients.read().unwrap().get(&id).cloned())
    }
}

// ============================================================================
// Mock Credit Scorer
// ============================================================================

pub struct MockCreditScorer {
    limit: i64,
    fail: bool,
    calls: RwLock<Vec<(String, NaiveDate)>>,
}

impl MockCreditScorer {
    /// Returns `limit` for every request
    pub fn new(limit: i64) -> Self {
        Self {
            limit,
            fail: false,
            calls: RwLock::new(Vec::new()),
        }
    }

    /// Every request fails with an upstream error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(0)
        }
    }

    pub fn calls(&self) -> Vec<(String, NaiveDate)> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

impl CreditScorer for MockCreditScorer {
    fn credit_limit(&self, last_name: &str, date_of_birth: NaiveDate) -> Result<i64, DomainError> {
        self.calls
            .write()
            .unwrap()
            .push((last_name.to_string(), date_of_birth));
        if self.fail {
            return Err(DomainError::Upstream("credit service unavailable".to_string()));
        }
        Ok(self.limit)
    }
}

// ============================================================================
// Recording User Repository
// ============================================================================

#[derive(Default)]
pub struct RecordingUserRepository {
    users: RwLock<Vec<User>>,
    attempts: AtomicUsize,
    fail: bool,
}

impl RecordingUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every store fails with a storage error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Vec<User> {
        self.users.read().unwrap().clone()
    }

    /// Number of `store` calls, including failed ones
    pub fn store_count(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl UserRepository for RecordingUserRepository {
    fn store(&self, user: User) -> Result<(), DomainError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DomainError::Storage("user store unavailable".to_string()));
        }
        self.users.write().unwrap().push(user);
        Ok(())
    }
}

// ============================================================================
// Fixed Clock
// ============================================================================

pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
