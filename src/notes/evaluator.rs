//! Heuristic note quality scoring
//!
//! Three metrics, each on a 0-100 scale:
//!
//! - completeness: share of distinct transcript words that reappear in the notes
//! - conciseness: how much shorter the notes are than the transcript
//! - structure: whether the notes use any markdown-ish markers
//!
//! The overall score is their mean. Scores are deterministic for a given input
//! pair and every pair of strings (including empty ones) yields a report.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Markers that count as structured formatting
const STRUCTURE_MARKERS: [&str; 5] = ["##", "**", "-", "•", "1."];

const COMPLETENESS_THRESHOLD: f64 = 70.0;
const CONCISENESS_THRESHOLD: f64 = 50.0;
const STRUCTURE_THRESHOLD: f64 = 80.0;

pub const FEEDBACK_COMPLETENESS: &str = "Consider capturing more key points";
pub const FEEDBACK_CONCISENESS: &str = "Notes could be more concise";
pub const FEEDBACK_STRUCTURE: &str = "Add more structure (headers, bullets)";
pub const FEEDBACK_GREAT: &str = "Great quality notes!";

/// Per-metric scores, rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub completeness: f64,
    pub conciseness: f64,
    pub structure: f64,
}

/// Result of evaluating one set of notes against its transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub overall_quality: f64,
    pub metrics: QualityMetrics,
    pub feedback: Vec<String>,
}

/// Score `notes` against the `transcript` they were generated from.
pub fn evaluate_notes(transcript: &str, notes: &str) -> QualityReport {
    let raw = QualityMetrics {
        completeness: completeness(transcript, notes),
        conciseness: conciseness(transcript, notes),
        structure: structure(notes),
    };

    let overall = (raw.completeness + raw.conciseness + raw.structure) / 3.0;

    QualityReport {
        overall_quality: round2(overall),
        metrics: QualityMetrics {
            completeness: round2(raw.completeness),
            conciseness: round2(raw.conciseness),
            structure: round2(raw.structure),
        },
        feedback: feedback(&raw),
    }
}

fn completeness(transcript: &str, notes: &str) -> f64 {
    let transcript_words = word_set(transcript);
    let notes_words = word_set(notes);
    let common = transcript_words.intersection(&notes_words).count();

    let ratio = common as f64 / transcript_words.len().max(1) as f64;
    (ratio * 100.0).min(100.0)
}

fn conciseness(transcript: &str, notes: &str) -> f64 {
    let transcript_len = transcript.chars().count().max(1) as f64;
    let compression_ratio = notes.chars().count() as f64 / transcript_len;
    ((1.0 - compression_ratio) * 100.0).max(0.0)
}

fn structure(notes: &str) -> f64 {
    if STRUCTURE_MARKERS.iter().any(|marker| notes.contains(marker)) {
        100.0
    } else {
        50.0
    }
}

fn feedback(metrics: &QualityMetrics) -> Vec<String> {
    let mut feedback = Vec::new();
    if metrics.completeness < COMPLETENESS_THRESHOLD {
        feedback.push(FEEDBACK_COMPLETENESS.to_string());
    }
    if metrics.conciseness < CONCISENESS_THRESHOLD {
        feedback.push(FEEDBACK_CONCISENESS.to_string());
    }
    if metrics.structure < STRUCTURE_THRESHOLD {
        feedback.push(FEEDBACK_STRUCTURE.to_string());
    }

    if feedback.is_empty() {
        feedback.push(FEEDBACK_GREAT.to_string());
    }
    feedback
}

/// Distinct lowercase tokens. The ASCII information separators (U+001C to
/// U+001F) count as whitespace alongside Unicode `White_Space`.
fn word_set(text: &str) -> HashSet<String> {
    text.split(is_word_separator)
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Round to two decimals, ties to even on the exact binary value.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
