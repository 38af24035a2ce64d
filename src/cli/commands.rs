//! CLI command implementations

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::agent::{NoteAgent, WorkflowOutput};
use crate::cli::args::{ConfigCommand, PrefsCommand};
use crate::config::Settings;
use crate::input::{ConsoleInput, FileInput, TranscriptSource};
use crate::llm::build_provider;
use crate::memory::{Memory, PreferenceUpdate, FORMAT_KEY, STYLE_KEY};
use crate::notes::{build_notes_prompt, evaluate_notes, export_notes, QualityReport};

/// Run the full note-taking workflow
pub async fn process_transcript(
    settings: &Settings,
    input: Option<PathBuf>,
    source_id: Option<String>,
    export: Option<Option<PathBuf>>,
    json: bool,
) -> Result<()> {
    let provider = build_provider(settings)?;
    let memory = open_memory(settings)?;

    let source = resolve_source_id(source_id, input.as_deref(), settings);
    let export = resolve_export_path(export, settings);

    let mut agent = NoteAgent::new(memory, provider, transcript_source(input));
    let output = agent.process(&source).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_workflow_output(&output);
    }

    if let Some(path) = export {
        export_notes(&output.notes, &path)?;
        if !json {
            println!("Notes exported to: {}", path.display());
        }
    }

    Ok(())
}

/// Score existing notes against their transcript
pub fn evaluate_files(transcript: &Path, notes: &Path, json: bool) -> Result<()> {
    let transcript = std::fs::read_to_string(transcript)
        .with_context(|| format!("Failed to read transcript: {}", transcript.display()))?;
    let notes = std::fs::read_to_string(notes)
        .with_context(|| format!("Failed to read notes: {}", notes.display()))?;

    let report = evaluate_notes(&transcript, &notes);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

/// Print the prompt that `process` would send
pub fn show_prompt(settings: &Settings, input: Option<PathBuf>) -> Result<()> {
    let memory = open_memory(settings)?;
    let transcript = transcript_source(input).acquire()?;

    let prompt = build_notes_prompt(
        &transcript,
        memory.get_preference(STYLE_KEY),
        memory.get_preference(FORMAT_KEY),
    );
    println!("{}", prompt);

    Ok(())
}

/// Handle prefs subcommands
pub fn prefs_command(settings: &Settings, cmd: PrefsCommand) -> Result<()> {
    let mut memory = open_memory(settings)?;

    match cmd {
        PrefsCommand::Show => {
            for (key, value) in memory.preferences() {
                println!("{} = {}", key, value);
            }
        }
        PrefsCommand::Get { key } => {
            println!("{}", memory.get_preference(&key));
        }
        PrefsCommand::Set { style, format } => {
            if style.is_none() && format.is_none() {
                println!("Nothing to update (use --style and/or --format)");
                return Ok(());
            }

            memory.update_preferences(PreferenceUpdate { style, format })?;
            println!("Style: {}", memory.get_preference(STYLE_KEY));
            println!("Format: {}", memory.get_preference(FORMAT_KEY));
        }
    }

    Ok(())
}

/// Show recorded sessions, most recent first
pub fn show_history(settings: &Settings, limit: usize) -> Result<()> {
    let memory = open_memory(settings)?;

    println!("{}", memory.history_summary());

    let sessions = memory.sessions();
    if sessions.is_empty() {
        return Ok(());
    }

    println!();
    println!("{:<28} {:<30} {:>8}", "Timestamp", "Source", "Score");
    println!("{}", "-".repeat(68));

    for session in sessions.iter().rev().take(limit) {
        println!(
            "{:<28} {:<30} {:>8.2}",
            session.timestamp,
            truncate(&session.source, 28),
            session.quality_score
        );
        println!("    {}", first_line(&session.notes_preview));
    }

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

// Helper functions

fn open_memory(settings: &Settings) -> Result<Memory> {
    let path = settings.memory_path();
    Memory::open(&path).with_context(|| format!("Failed to load memory: {}", path.display()))
}

/// Explicit id, else the input path, else the configured default source
fn resolve_source_id(
    source_id: Option<String>,
    input: Option<&Path>,
    settings: &Settings,
) -> String {
    source_id.unwrap_or_else(|| match input {
        Some(path) => path.display().to_string(),
        None => settings.notes.default_source.clone(),
    })
}

/// `--export` without a value falls back to `notes.export_file`
fn resolve_export_path(
    export: Option<Option<PathBuf>>,
    settings: &Settings,
) -> Option<PathBuf> {
    export.map(|path| path.unwrap_or_else(|| settings.notes.export_file.clone()))
}

fn transcript_source(input: Option<PathBuf>) -> Box<dyn TranscriptSource> {
    match input {
        Some(path) => Box::new(FileInput::new(path)),
        None => Box::new(ConsoleInput::stdin()),
    }
}

fn print_workflow_output(output: &WorkflowOutput) {
    println!("{}", "=".repeat(50));
    println!("GENERATED NOTES:");
    println!("{}", "=".repeat(50));
    println!("{}", output.notes);
    println!();
    print_report(&output.evaluation);
}

fn print_report(report: &QualityReport) {
    println!("{}", "=".repeat(50));
    println!("EVALUATION REPORT:");
    println!("{}", "=".repeat(50));
    println!("Overall Quality: {}/100", report.overall_quality);
    println!("  Completeness: {}", report.metrics.completeness);
    println!("  Conciseness:  {}", report.metrics.conciseness);
    println!("  Structure:    {}", report.metrics.structure);
    println!("Feedback: {}", report.feedback.join(", "));
}

fn first_line(s: &str) -> &str {
    s.lines().next().unwrap_or("")
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", kept)
    }
}
