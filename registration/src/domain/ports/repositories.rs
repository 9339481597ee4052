//! Repository port traits
//!
//! These traits define the interface for client lookup and user persistence.
//! Implementations are provided by adapters (e.g., JSON files).

use crate::domain::entities::{Client, ClientId, User};
use crate::error::DomainError;

/// Read-only directory of clients
pub trait ClientRepository: Send + Sync {
    /// Find a client by ID
    fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, DomainError>;
}

/// Sink for users that passed registration
pub trait UserRepository: Send + Sync {
    /// Store a validated user, taking ownership of the record
    fn store(&self, user: User) -> Result<(), DomainError>;
}
