//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// notesmith - Structured notes from transcripts, with quality scoring and memory
#[derive(Parser, Debug)]
#[command(name = "notesmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate, score and record notes for a transcript
    Process {
        /// Read the transcript from a file instead of prompting for it
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Identifier recorded in the session history
        #[arg(short, long)]
        source_id: Option<String>,

        /// Export the notes as Markdown (defaults to notes.export_file)
        #[arg(short, long, num_args = 0..=1)]
        export: Option<Option<PathBuf>>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score existing notes against their transcript
    Evaluate {
        /// Transcript file
        #[arg(short, long)]
        transcript: PathBuf,

        /// Notes file
        #[arg(short, long)]
        notes: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the prompt that would be sent for a transcript
    Prompt {
        /// Transcript file (prompts for text when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Manage note preferences
    #[command(subcommand)]
    Prefs(PrefsCommand),

    /// Show recorded sessions
    History {
        /// Maximum number of sessions to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum PrefsCommand {
    /// Show all stored preferences
    Show,

    /// Print a single preference value
    Get {
        /// Preference key (e.g., style, format)
        key: String,
    },

    /// Update style and/or format
    Set {
        /// Note style (e.g., detailed, brief)
        #[arg(long)]
        style: Option<String>,

        /// Note format (e.g., bullet, numbered)
        #[arg(long)]
        format: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
