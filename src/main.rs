//! notesmith - Structured notes from transcripts
//!
//! Entry point for the notesmith CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use notesmith::cli::{Cli, Commands};
use notesmith::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration only for commands that touch memory or the LLM.
    let settings = match cli.command {
        Commands::Completions { .. } | Commands::Evaluate { .. } => None,
        _ => Some(Settings::load()?),
    };

    // Initialize logging
    let default_filter = match &settings {
        Some(settings) => settings.log_filter(cli.verbose),
        None if cli.verbose => "debug".to_string(),
        None => "info".to_string(),
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            notesmith::cli::completions::print(shell);
        }
        Commands::Evaluate {
            transcript,
            notes,
            json,
        } => {
            notesmith::cli::commands::evaluate_files(&transcript, &notes, json)?;
        }
        command => {
            let Some(settings) = settings else {
                unreachable!("settings are loaded for every runtime command")
            };

            // Execute command
            match command {
                Commands::Process {
                    input,
                    source_id,
                    export,
                    json,
                } => {
                    notesmith::cli::commands::process_transcript(
                        &settings, input, source_id, export, json,
                    )
                    .await?;
                }
                Commands::Prompt { input } => {
                    notesmith::cli::commands::show_prompt(&settings, input)?;
                }
                Commands::Prefs(prefs_cmd) => {
                    notesmith::cli::commands::prefs_command(&settings, prefs_cmd)?;
                }
                Commands::History { limit } => {
                    notesmith::cli::commands::show_history(&settings, limit)?;
                }
                Commands::Config(config_cmd) => {
                    notesmith::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } | Commands::Evaluate { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
