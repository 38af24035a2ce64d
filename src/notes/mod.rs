//! Notes module for notesmith
//!
//! Prompt construction, quality evaluation and export of generated notes.

mod evaluator;
mod export;
mod prompts;

pub use evaluator::{
    evaluate_notes, QualityMetrics, QualityReport, FEEDBACK_COMPLETENESS, FEEDBACK_CONCISENESS,
    FEEDBACK_GREAT, FEEDBACK_STRUCTURE,
};
pub use export::{export_notes, render_export, EXPORT_TITLE};
pub use prompts::build_notes_prompt;
