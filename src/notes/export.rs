//! Markdown export of generated notes

use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone};
use std::path::Path;

/// Title line of every exported document
pub const EXPORT_TITLE: &str = "# Meeting Notes";

/// Render the export document for `notes` generated at `generated_at`.
pub fn render_export<Tz: TimeZone>(notes: &str, generated_at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}\nGenerated: {}\n\n{}",
        EXPORT_TITLE,
        generated_at.format("%Y-%m-%d %H:%M"),
        notes
    )
}

/// Write notes to `path`, replacing any existing file.
pub fn export_notes(notes: &str, path: &Path) -> Result<()> {
    let content = render_export(notes, &Local::now());
    std::fs::write(path, content)
        .with_context(|| format!("Failed to export notes to {}", path.display()))?;

    tracing::info!("Notes exported to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn export_has_title_timestamp_and_notes() {
        let at = Utc.with_ymd_and_hms(2025, 3, 7, 9, 5, 0).unwrap();
        let rendered = render_export("## Notes\n- item", &at);
        assert_eq!(
            rendered,
            "# Meeting Notes\nGenerated: 2025-03-07 09:05\n\n## Notes\n- item"
        );
    }

    #[test]
    fn export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes_output.md");
        std::fs::write(&path, "old content that is longer than the new one").unwrap();

        export_notes("- new", &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Meeting Notes\nGenerated: "));
        assert!(written.ends_with("\n\n- new"));
        assert!(!written.contains("old content"));
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing/notes.md");

        let err = export_notes("- item", &path).unwrap_err();
        assert!(err.to_string().contains("Failed to export notes"));
    }
}
