//! Preference lookup and updates

use crate::memory::models::{Preferences, DEFAULT_PREFERENCE, FORMAT_KEY, STYLE_KEY};
use crate::memory::store::StateStore;
use crate::memory::Memory;
use crate::Result;

/// Preference changes; `None` or empty values leave a preference untouched.
#[derive(Debug, Clone, Default)]
pub struct PreferenceUpdate {
    pub style: Option<String>,
    pub format: Option<String>,
}

impl<S: StateStore> Memory<S> {
    /// Value of a preference, or [`DEFAULT_PREFERENCE`] if it is unset
    pub fn get_preference(&self, key: &str) -> &str {
        self.state
            .preferences
            .get(key)
            .map(String::as_str)
            .unwrap_or(DEFAULT_PREFERENCE)
    }

    /// Set a preference and persist the whole state
    pub fn set_preference(&mut self, key: &str, value: &str) -> Result<()> {
        self.state
            .preferences
            .insert(key.to_string(), value.to_string());
        self.flush()?;

        tracing::debug!(key, value, "Preference updated");
        Ok(())
    }

    /// Apply an update; each supplied value is persisted immediately.
    pub fn update_preferences(&mut self, update: PreferenceUpdate) -> Result<()> {
        if let Some(style) = update.style.filter(|s| !s.is_empty()) {
            self.set_preference(STYLE_KEY, &style)?;
            tracing::info!("Style preference updated to: {}", style);
        }
        if let Some(format) = update.format.filter(|f| !f.is_empty()) {
            self.set_preference(FORMAT_KEY, &format)?;
            tracing::info!("Format preference updated to: {}", format);
        }
        Ok(())
    }

    /// All stored preferences
    pub fn preferences(&self) -> &Preferences {
        &self.state.preferences
    }
}
