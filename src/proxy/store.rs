//! Persistence for the ranked proxy node list
//!
//! The cache is a single slot: one JSON document holding the node list and
//! its creation timestamp. Concurrent refreshes may overwrite each other;
//! that race is accepted since a refresh is an idempotent overwrite and the
//! only cost of losing it is one extra ranking call.

use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::node_cache_path;
use crate::error::StoreError;

/// A ranked node list together with its creation instant (ms since epoch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedNodes {
    pub nodes: Vec<String>,
    pub timestamp: i64,
}

impl CachedNodes {
    pub fn new(nodes: Vec<String>) -> Self {
        Self {
            nodes,
            timestamp: current_timestamp_ms(),
        }
    }

    /// An entry is valid only while `now - timestamp < ttl`.
    pub fn is_fresh(&self, ttl_ms: i64) -> bool {
        current_timestamp_ms() - self.timestamp < ttl_ms
    }
}

fn current_timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Key-value style storage for the cached node list.
#[cfg_attr(test, automock)]
pub trait NodeStore: Send + Sync {
    /// Read the stored entry, `None` if nothing has been stored yet.
    fn load(&self) -> Result<Option<CachedNodes>, StoreError>;

    /// Overwrite the stored entry.
    fn save(&self, entry: &CachedNodes) -> Result<(), StoreError>;
}

/// File-backed store keeping the entry as a JSON document in the data dir.
pub struct FileNodeStore {
    path: PathBuf,
}

impl FileNodeStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for FileNodeStore {
    fn default() -> Self {
        Self::new(node_cache_path())
    }
}

impl NodeStore for FileNodeStore {
    fn load(&self) -> Result<Option<CachedNodes>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(entry) => Ok(Some(entry)),
            Err(e) => {
                // A corrupt cache file is the same as an empty one; the next
                // refresh overwrites it.
                debug!("Discarding unreadable node cache at {:?}: {}", self.path, e);
                Ok(None)
            }
        }
    }

    fn save(&self, entry: &CachedNodes) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(entry)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
