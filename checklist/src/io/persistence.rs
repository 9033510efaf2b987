//! Snapshot load/save under a single fixed storage key.

use thiserror::Error;
use tracing::debug;

use crate::core::snapshot::{PersistedSnapshot, decode_snapshot, encode_snapshot};
use crate::io::store::KeyValueStore;

/// Recoverable persistence failures. Callers decide whether to ignore them.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Stored snapshot is unreadable, not JSON, or has the wrong shape.
    #[error("read checklist state '{key}': {source:#}")]
    Read {
        key: String,
        #[source]
        source: anyhow::Error,
    },
    /// Storage is unavailable or rejected the write.
    #[error("write checklist state '{key}': {source:#}")]
    Write {
        key: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Reads and writes [`PersistedSnapshot`] through a [`KeyValueStore`].
#[derive(Debug)]
pub struct PersistenceAdapter<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Load the stored snapshot.
    ///
    /// A missing or empty value is `Ok(None)`: nothing has been saved yet.
    pub fn load(&self) -> Result<Option<PersistedSnapshot>, PersistenceError> {
        debug!(key = %self.key, "loading checklist state");
        let raw = self.store.get(&self.key).map_err(|source| self.read_error(source))?;
        let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
            debug!(key = %self.key, "no stored checklist state");
            return Ok(None);
        };
        let snapshot = decode_snapshot(&raw).map_err(|err| self.read_error(err.into()))?;
        debug!(
            key = %self.key,
            completed = snapshot.completed.len(),
            open_id = ?snapshot.open_id,
            "checklist state loaded"
        );
        Ok(Some(snapshot))
    }

    /// Encode and write `snapshot`, replacing the stored value.
    pub fn save(&mut self, snapshot: &PersistedSnapshot) -> Result<(), PersistenceError> {
        let encoded = encode_snapshot(snapshot).map_err(|err| self.write_error(err.into()))?;
        debug!(
            key = %self.key,
            completed = snapshot.completed.len(),
            open_id = ?snapshot.open_id,
            "writing checklist state"
        );
        self.store
            .set(&self.key, &encoded)
            .map_err(|source| PersistenceError::Write {
                key: self.key.clone(),
                source,
            })
    }

    fn read_error(&self, source: anyhow::Error) -> PersistenceError {
        PersistenceError::Read {
            key: self.key.clone(),
            source,
        }
    }

    fn write_error(&self, source: anyhow::Error) -> PersistenceError {
        PersistenceError::Write {
            key: self.key.clone(),
            source,
        }
    }
}
