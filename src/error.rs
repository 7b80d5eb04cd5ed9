//! Error types shared across the inventory core and the persistence boundary

use std::path::PathBuf;
use thiserror::Error;

/// Input rejected before any mutation took place
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("item name must not be empty")]
    EmptyName,
}

/// A backend row that cannot be turned into a valid item
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("row is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("row '{id}' has a blank name")]
    BlankName { id: String },

    #[error("row '{id}' has unknown location '{value}'")]
    InvalidLocation { id: String, value: String },
}

/// Failure talking to the persistence backend
///
/// Always advisory: the in-memory collection stays authoritative.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(
        "{} uses format version {found}, newer than this build supports",
        path.display()
    )]
    UnsupportedVersion { path: PathBuf, found: u32 },

    #[error("failed to encode items: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("item '{0}' does not exist in the backend")]
    Missing(String),

    #[error("persistence worker has stopped")]
    Closed,

    #[error("backend error: {0}")]
    Backend(String),
}
