//! notesmith - Turn transcripts into structured notes, score them, and remember preferences
//!
//! A transcript goes in, Gemini writes notes, a heuristic evaluator scores them,
//! and a small JSON memory keeps formatting preferences plus a session history.

pub mod agent;
pub mod cli;
pub mod config;
pub mod input;
pub mod llm;
pub mod memory;
pub mod notes;

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for notesmith
#[derive(Error, Debug)]
pub enum NotesmithError {
    #[error("Memory file {path} is corrupt: {source}")]
    CorruptState {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NotesmithError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "notesmith";
