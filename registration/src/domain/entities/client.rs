//! Client domain entity
//!
//! A contracting party that users register under. The category decides
//! whether and how a credit limit is computed for its users.

use serde::{Deserialize, Serialize};

/// Identifier of a client in the client directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub i32);

impl From<i32> for ClientId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientCategory {
    #[serde(alias = "RegularClient")]
    Regular,
    #[serde(alias = "ImportantClient")]
    Important,
    #[serde(alias = "VeryImportantClient")]
    VeryImportant,
}

impl std::fmt::Display for ClientCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientCategory::Regular => write!(f, "regular"),
            ClientCategory::Important => write!(f, "important"),
            ClientCategory::VeryImportant => write!(f, "very_important"),
        }
    }
}

impl std::str::FromStr for ClientCategory {
    type Err = String;

    /// Accepts the snake_case names as well as the legacy directory names
    /// (`RegularClient`, `ImportantClient`, `VeryImportantClient`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "regular" | "regularclient" => Ok(ClientCategory::Regular),
            "important" | "importantclient" => Ok(ClientCategory::Important),
            "very_important" | "veryimportant" | "veryimportantclient" => {
                Ok(ClientCategory::VeryImportant)
            }
            _ => Err(format!("Unknown client category: {}", s)),
        }
    }
}

/// A client record as held by the client directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub category: ClientCategory,
}

impl Client {
    pub fn new(id: impl Into<ClientId>, category: ClientCategory) -> Self {
        Self {
            id: id.into(),
            category,
        }
    }
}
