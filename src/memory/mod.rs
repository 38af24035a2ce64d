//! Memory module for notesmith
//!
//! Preferences and session history live in one persisted state, written in
//! full through a [`StateStore`] after every change.

mod models;
mod preferences;
mod sessions;
mod store;

pub use models::{
    PersistedState, Preferences, SessionRecord, DEFAULT_FORMAT, DEFAULT_PREFERENCE, FORMAT_KEY,
    NOTES_PREVIEW_CHARS, STYLE_KEY,
};
pub use preferences::PreferenceUpdate;
pub use store::{InMemoryStore, JsonFileStore, StateStore};

use crate::Result;

/// Preference store and session log over a single persisted state
pub struct Memory<S: StateStore = JsonFileStore> {
    store: S,
    state: PersistedState,
}

impl<S: StateStore> Memory<S> {
    /// Load state from the store, falling back to defaults if none is stored.
    ///
    /// A store that holds data which cannot be parsed fails with
    /// [`crate::NotesmithError::CorruptState`].
    pub fn load(store: S) -> Result<Self> {
        let state = store.load()?.unwrap_or_default();
        Ok(Self { store, state })
    }

    /// Current in-memory state
    pub fn state(&self) -> &PersistedState {
        &self.state
    }

    fn flush(&self) -> Result<()> {
        self.store.save(&self.state)
    }
}

impl Memory<JsonFileStore> {
    /// Load the memory file at `path`
    pub fn open(path: impl Into<std::path::PathBuf>) -> Result<Self> {
        Self::load(JsonFileStore::new(path))
    }
}
