/// Build a deterministic note-generation prompt for a transcript.
///
/// `style` and `format` come from the user's preferences and are embedded
/// verbatim, as is the transcript.
pub fn build_notes_prompt(transcript: &str, style: &str, format: &str) -> String {
    format!(
        "Create {style} notes from this transcript in {format} format.\n\
\n\
Guidelines:\n\
- Extract key points and action items\n\
- Use clear structure with headers\n\
- Include dates, numbers, and names\n\
- Highlight important decisions\n\
- Give a list of important questions\n\
\n\
Transcript:\n\
{transcript}\n\
\n\
Generate well-structured notes:"
    )
}
