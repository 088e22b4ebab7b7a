//! Connection lifecycle for generated persistence code.
//!
//! [`Datasource`] caches one open SQLite connection per storage path and
//! hands out shared handles. It is an injectable resource, never global
//! state: callers construct it, pass it to collaborators, and drop it when
//! the mock layer goes away. The core crates never touch it.

use parking_lot::Mutex;
use rusqlite::Connection;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::Arc,
};
use thiserror::Error as ThisError;
use tracing::debug;

///
/// StoreError
///

#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("failed to open datasource '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
}

/// A cached connection handle. Locked per statement by callers.
pub type SharedConnection = Arc<Mutex<Connection>>;

///
/// Datasource
///
/// Keyed registry of open connections. Cloning shares the registry.
///

#[derive(Clone, Debug, Default)]
pub struct Datasource {
    connections: Arc<Mutex<BTreeMap<PathBuf, SharedConnection>>>,
}

impl Datasource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached connection for a path, opening one on first use.
    pub fn acquire(&self, path: impl AsRef<Path>) -> Result<SharedConnection, StoreError> {
        let path = path.as_ref();
        let mut connections = self.connections.lock();

        if let Some(existing) = connections.get(path) {
            return Ok(Arc::clone(existing));
        }

        let connection = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "opened datasource");

        let shared = Arc::new(Mutex::new(connection));
        connections.insert(path.to_path_buf(), Arc::clone(&shared));

        Ok(shared)
    }

    /// Evict a path's connection. It closes once the last handle drops.
    pub fn release(&self, path: impl AsRef<Path>) -> bool {
        let removed = self.connections.lock().remove(path.as_ref()).is_some();

        if removed {
            debug!(path = %path.as_ref().display(), "released datasource");
        }

        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.connections.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.connections.lock().is_empty()
    }
}
