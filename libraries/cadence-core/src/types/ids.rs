//! ID types for Cadence entities

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Song identifier
///
/// Generated once when a song record is created and never changed afterwards.
/// Queue copies are new records and get their own id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(String);

impl SongId {
    /// Wrap an existing id string (e.g. one received from a client)
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random song ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SongId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
