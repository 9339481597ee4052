//! JSON file adapter for ClientRepository

use std::collections::HashMap;
use std::path::Path;

use crate::domain::entities::{Client, ClientId};
use crate::domain::ports::ClientRepository;
use crate::error::DomainError;

/// Client directory loaded once from a JSON array of client records
pub struct JsonClientRepository {
    clients: HashMap<ClientId, Client>,
}

impl JsonClientRepository {
    /// Load the directory from `path`
    ///
    /// Expected format: `[{"id": 1, "category": "important"}, ...]`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let clients: Vec<Client> = serde_json::from_str(&raw)?;
        Self::from_clients(clients)
    }

    pub fn from_clients(clients: Vec<Client>) -> Result<Self, DomainError> {
        let mut by_id = HashMap::with_capacity(clients.len());
        for client in clients {
            if by_id.contains_key(&client.id) {
                return Err(DomainError::InvalidDirectory(format!(
                    "duplicate client id {} in directory",
                    client.id
                )));
            }
            by_id.insert(client.id, client);
        }
        tracing::debug!(count = by_id.len(), "Loaded client directory");
        Ok(Self { clients: by_id })
    }
}

impl ClientRepository for JsonClientRepository {
    fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, DomainError> {
        Ok(self.clients.get(&id).cloned())
    }
}
