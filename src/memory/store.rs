//! Persistence port for the memory state
//!
//! The whole state is read once and rewritten in full on every change. There is
//! no locking: two processes sharing a file race and the last writer wins.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::memory::models::PersistedState;
use crate::{NotesmithError, Result};

/// Load/save access to the persisted state
pub trait StateStore {
    /// Read the stored state, or `None` if nothing has been stored yet
    fn load(&self) -> Result<Option<PersistedState>>;

    /// Replace the stored state
    fn save(&self, state: &PersistedState) -> Result<()>;
}

/// Pretty-printed JSON file store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<Option<PersistedState>> {
        if !self.path.exists() {
            tracing::debug!("No memory file at {}, using defaults", self.path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let state = serde_json::from_str(&content).map_err(|source| {
            NotesmithError::CorruptState {
                path: self.path.clone(),
                source,
            }
        })?;

        tracing::debug!("Loaded memory from {}", self.path.display());
        Ok(Some(state))
    }

    fn save(&self, state: &PersistedState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, content)?;

        tracing::debug!(
            sessions = state.sessions.len(),
            "Wrote memory to {}",
            self.path.display()
        );
        Ok(())
    }
}

/// Store that keeps the state in process memory
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<Option<PersistedState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last saved state
    pub fn snapshot(&self) -> Option<PersistedState> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<PersistedState>> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StateStore for InMemoryStore {
    fn load(&self) -> Result<Option<PersistedState>> {
        Ok(self.lock().clone())
    }

    fn save(&self, state: &PersistedState) -> Result<()> {
        *self.lock() = Some(state.clone());
        Ok(())
    }
}

impl<S: StateStore + ?Sized> StateStore for &S {
    fn load(&self) -> Result<Option<PersistedState>> {
        (**self).load()
    }

    fn save(&self, state: &PersistedState) -> Result<()> {
        (**self).save(state)
    }
}
