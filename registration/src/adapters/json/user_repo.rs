//! JSON-lines file adapter for UserRepository

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::domain::entities::User;
use crate::domain::ports::UserRepository;
use crate::error::DomainError;

/// Appends each stored user as one JSON document per line
pub struct JsonLinesUserRepository {
    path: PathBuf,
}

impl JsonLinesUserRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back every stored user. A missing file holds no users.
    pub fn read_all(&self) -> Result<Vec<User>, DomainError> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut users = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            users.push(serde_json::from_str(&line)?);
        }
        Ok(users)
    }
}

impl UserRepository for JsonLinesUserRepository {
    fn store(&self, user: User) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut line = serde_json::to_string(&user)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;

        tracing::debug!(path = %self.path.display(), "Stored user");
        Ok(())
    }
}
