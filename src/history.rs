//! Submission history store
//!
//! The only durable state in the system: a JSON array of every URL ever
//! queued for submission. Loaded once at run start, extended with the URLs
//! processed in the run, written back once at run end. Cross-process
//! concurrent runs are unsupported; last writer wins.

use crate::error::Result;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Persisted set of previously-submitted URLs
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the history set
    ///
    /// An absent or unparsable file yields the empty set; load never fails
    /// the caller.
    pub fn load(&self) -> HashSet<String> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "no usable history file, starting empty");
                return HashSet::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&data) {
            Ok(urls) => urls.into_iter().collect(),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "history file unparsable, starting empty");
                HashSet::new()
            }
        }
    }

    /// Overwrite the persisted history with the full set
    ///
    /// URLs are written sorted so saving the same set twice produces the
    /// same stored bytes.
    pub fn save(&self, urls: &HashSet<String>) -> Result<()> {
        let mut sorted: Vec<&String> = urls.iter().collect();
        sorted.sort();
        let data = serde_json::to_string(&sorted)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
