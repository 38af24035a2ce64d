//! Transcript sources
//!
//! Stand-ins for real audio transcription: the transcript is typed in or read
//! from a text file.

use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

/// Provides one block of transcript text per call
pub trait TranscriptSource: Send {
    fn acquire(&mut self) -> Result<String>;
}

/// Prompts the operator for a single line of text
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<BufReader<std::io::Stdin>, std::io::Stdout> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead + Send, W: Write + Send> TranscriptSource for ConsoleInput<R, W> {
    fn acquire(&mut self) -> Result<String> {
        writeln!(self.writer, "{}", "-".repeat(20))?;
        write!(self.writer, "Enter your text: ")?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .context("Failed to read transcript from stdin")?;

        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}

/// Reads the whole transcript from a file
pub struct FileInput {
    path: PathBuf,
}

impl FileInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TranscriptSource for FileInput {
    fn acquire(&mut self) -> Result<String> {
        std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read transcript: {}", self.path.display()))
    }
}
