//! Append-only session history

use crate::memory::models::SessionRecord;
use crate::memory::store::StateStore;
use crate::memory::Memory;
use crate::Result;

impl<S: StateStore> Memory<S> {
    /// Record a completed run and persist the whole state
    pub fn record_session(
        &mut self,
        source: &str,
        notes: &str,
        quality_score: f64,
    ) -> Result<&SessionRecord> {
        self.state
            .sessions
            .push(SessionRecord::new(source, notes, quality_score));
        self.flush()?;

        let count = self.state.sessions.len();
        Ok(&self.state.sessions[count - 1])
    }

    /// Recorded sessions, oldest first
    pub fn sessions(&self) -> &[SessionRecord] {
        &self.state.sessions
    }

    pub fn history_summary(&self) -> String {
        format!("Total sessions: {}", self.state.sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::memory::{InMemoryStore, Memory};

    #[test]
    fn record_session_appends_one_record() {
        let store = InMemoryStore::new();
        let mut memory = Memory::load(&store).unwrap();
        assert_eq!(memory.history_summary(), "Total sessions: 0");

        let notes = "x".repeat(250);
        let record = memory.record_session("meeting.mp3", &notes, 55.5).unwrap();
        assert_eq!(record.notes_preview, "x".repeat(100));
        assert_eq!(record.source, "meeting.mp3");
        assert_eq!(record.quality_score, 55.5);

        memory.record_session("standup.mp3", "- done", 90.0).unwrap();
        assert_eq!(memory.sessions().len(), 2);
        assert_eq!(memory.sessions()[1].source, "standup.mp3");
        assert_eq!(memory.history_summary(), "Total sessions: 2");

        let saved = store.snapshot().expect("state should be saved");
        assert_eq!(saved.sessions, memory.sessions());
    }
}
