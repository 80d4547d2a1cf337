//! Local persistence for the call collection.
//!
//! The durable slot is a single JSON file under the storage root:
//!
//! ```text
//! <root>/calls.json    # Flat array of Call records
//! ```
//!
//! The whole collection is rewritten on every save (last-writer-wins);
//! there is no merge and no schema migration.

use std::{fs, io, path::PathBuf};

use crate::model::Call;

/// Errors that can occur writing the durable slot.
///
/// Reads never surface here — a broken slot loads as an empty collection.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// File-based storage for the call collection.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Creates a storage instance rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            path: root.join("calls.json"),
        })
    }

    /// Returns the default storage root: `~/.callbook/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".callbook"))
    }

    /// Loads the call collection from the slot.
    ///
    /// Fails open: a missing or unparsable slot yields an empty collection
    /// rather than an error. The slot is rewritten wholesale on the next
    /// save, so the in-memory collection stays authoritative either way.
    pub fn load(&self) -> Vec<Call> {
        let Ok(json) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&json).unwrap_or_default()
    }

    /// Serializes the full collection and overwrites the slot.
    pub fn save(&self, calls: &[Call]) -> Result<()> {
        let json = serde_json::to_string_pretty(calls)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
