//! Note-taking agent
//!
//! Runs one workflow per call: acquire a transcript, build a prompt from the
//! stored preferences, generate notes, score them, and log the session.
//! A failed generation aborts the run before anything is recorded.

use anyhow::Result;
use serde::Serialize;

use crate::input::TranscriptSource;
use crate::llm::{GenerateRequest, LlmProvider};
use crate::memory::{Memory, PreferenceUpdate, StateStore, FORMAT_KEY, STYLE_KEY};
use crate::notes::{build_notes_prompt, evaluate_notes, QualityReport};

/// Output of one completed workflow run
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowOutput {
    pub transcript: String,
    pub notes: String,
    pub evaluation: QualityReport,
}

pub struct NoteAgent<S: StateStore> {
    memory: Memory<S>,
    provider: Box<dyn LlmProvider>,
    input: Box<dyn TranscriptSource>,
}

impl<S: StateStore> NoteAgent<S> {
    pub fn new(
        memory: Memory<S>,
        provider: Box<dyn LlmProvider>,
        input: Box<dyn TranscriptSource>,
    ) -> Self {
        tracing::info!("{}", memory.history_summary());
        Self {
            memory,
            provider,
            input,
        }
    }

    /// Run the full workflow, recording the session under `source`.
    pub async fn process(&mut self, source: &str) -> Result<WorkflowOutput> {
        let transcript = self.input.acquire()?;
        tracing::info!(
            "Transcription complete ({} chars)",
            transcript.chars().count()
        );

        let prompt = build_notes_prompt(
            &transcript,
            self.memory.get_preference(STYLE_KEY),
            self.memory.get_preference(FORMAT_KEY),
        );

        tracing::info!("Generating notes");
        let notes = self
            .provider
            .generate(GenerateRequest { prompt: &prompt })
            .await?;
        tracing::info!("Notes generated ({} chars)", notes.chars().count());

        let evaluation = evaluate_notes(&transcript, &notes);
        tracing::info!("Quality score: {}/100", evaluation.overall_quality);

        self.memory
            .record_session(source, &notes, evaluation.overall_quality)?;

        Ok(WorkflowOutput {
            transcript,
            notes,
            evaluation,
        })
    }

    /// Apply preference changes; they take effect on the next `process` call.
    pub fn set_preferences(&mut self, update: PreferenceUpdate) -> Result<()> {
        self.memory.update_preferences(update)?;
        Ok(())
    }

    pub fn memory(&self) -> &Memory<S> {
        &self.memory
    }
}
