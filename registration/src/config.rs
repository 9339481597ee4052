use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON array of client records
    pub clients_file: PathBuf,
    /// JSON document with per-surname base credit limits
    pub credit_file: PathBuf,
    /// JSON-lines file that accepted users are appended to
    pub users_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key))
    }

    /// Build from an arbitrary variable source
    fn from_lookup(
        lookup: impl Fn(&str) -> Result<String, env::VarError>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            clients_file: path_var(&lookup, "CLIENTS_FILE", "data/clients.json")?,
            credit_file: path_var(&lookup, "CREDIT_FILE", "data/credit_limits.json")?,
            users_file: path_var(&lookup, "USERS_FILE", "data/users.jsonl")?,
        })
    }
}

fn path_var(
    lookup: impl Fn(&str) -> Result<String, env::VarError>,
    key: &'static str,
    default: &str,
) -> Result<PathBuf, ConfigError> {
    match lookup(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidValue {
            key,
            message: "must not be empty".to_string(),
        }),
        Ok(value) => Ok(PathBuf::from(value)),
        Err(env::VarError::NotPresent) => Ok(PathBuf::from(default)),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
            key,
            message: "not valid unicode".to_string(),
        }),
    }
}
