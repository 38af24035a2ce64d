//! Data models for the persisted memory

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named string preferences controlling note generation
pub type Preferences = BTreeMap<String, String>;

/// Key for the note style preference ("detailed", "brief", ...)
pub const STYLE_KEY: &str = "style";

/// Key for the note format preference ("bullet", "numbered", ...)
pub const FORMAT_KEY: &str = "format";

/// Value returned for any preference that has not been set.
///
/// The same fallback applies to every key, including `format`.
pub const DEFAULT_PREFERENCE: &str = "detailed";

/// Default `format` written into a fresh memory file
pub const DEFAULT_FORMAT: &str = "bullet";

/// Number of characters of generated notes kept in a session record
pub const NOTES_PREVIEW_CHARS: usize = 100;

/// One completed workflow run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Local ISO-8601 timestamp of when the run finished
    pub timestamp: String,

    /// Identifier of the transcript source
    #[serde(rename = "audio_file")]
    pub source: String,

    /// First characters of the generated notes
    pub notes_preview: String,

    /// Overall quality score of the notes
    pub quality_score: f64,
}

impl SessionRecord {
    /// Create a record stamped with the current local time
    pub fn new(source: &str, notes: &str, quality_score: f64) -> Self {
        Self {
            timestamp: chrono::Local::now()
                .naive_local()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
            source: source.to_string(),
            notes_preview: notes_preview(notes),
            quality_score,
        }
    }
}

/// Everything written to the memory file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub preferences: Preferences,
    pub sessions: Vec<SessionRecord>,
}

impl Default for PersistedState {
    fn default() -> Self {
        let mut preferences = Preferences::new();
        preferences.insert(STYLE_KEY.to_string(), DEFAULT_PREFERENCE.to_string());
        preferences.insert(FORMAT_KEY.to_string(), DEFAULT_FORMAT.to_string());

        Self {
            preferences,
            sessions: Vec::new(),
        }
    }
}

fn notes_preview(notes: &str) -> String {
    notes.chars().take(NOTES_PREVIEW_CHARS).collect()
}
