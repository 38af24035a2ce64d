use anyhow::Result;
use tempfile::tempdir;

use notesmith::memory::{JsonFileStore, Memory, PersistedState, StateStore};
use notesmith::NotesmithError;

#[test]
fn memory_survives_a_fresh_load() -> Result<()> {
    let tmp = tempdir()?;
    let path = tmp.path().join("agent_memory.json");

    let mut memory = Memory::open(&path)?;
    assert_eq!(memory.history_summary(), "Total sessions: 0");

    memory.set_preference("style", "brief")?;
    memory.record_session("monday.mp3", "## Monday\n- Budget approved", 72.5)?;
    memory.set_preference("format", "numbered")?;
    memory.record_session("tuesday.mp3", "- Hiring plan", 64.1)?;
    drop(memory);

    let reloaded = Memory::open(&path)?;
    assert_eq!(reloaded.get_preference("style"), "brief");
    assert_eq!(reloaded.get_preference("format"), "numbered");
    assert_eq!(reloaded.history_summary(), "Total sessions: 2");

    let sources: Vec<&str> = reloaded
        .sessions()
        .iter()
        .map(|s| s.source.as_str())
        .collect();
    assert_eq!(sources, ["monday.mp3", "tuesday.mp3"]);
    assert_eq!(reloaded.sessions()[0].quality_score, 72.5);

    Ok(())
}

#[test]
fn every_mutation_rewrites_the_whole_file() -> Result<()> {
    let tmp = tempdir()?;
    let path = tmp.path().join("agent_memory.json");

    let mut memory = Memory::open(&path)?;
    assert!(!path.exists(), "loading alone should not create the file");

    memory.set_preference("tone", "formal")?;
    let on_disk = JsonFileStore::new(&path)
        .load()?
        .expect("file should exist after a write");
    assert_eq!(on_disk.preferences["tone"], "formal");
    assert_eq!(on_disk.preferences["style"], "detailed");
    assert_eq!(on_disk.preferences["format"], "bullet");
    assert!(on_disk.sessions.is_empty());

    Ok(())
}

#[test]
fn corrupt_file_is_not_replaced_with_defaults() -> Result<()> {
    let tmp = tempdir()?;
    let path = tmp.path().join("agent_memory.json");
    std::fs::write(&path, "not json at all")?;

    let err = match Memory::open(&path) {
        Ok(_) => panic!("expected corrupt memory to fail loading"),
        Err(e) => e,
    };
    assert!(matches!(err, NotesmithError::CorruptState { .. }));
    assert_eq!(std::fs::read_to_string(&path)?, "not json at all");

    Ok(())
}

#[test]
fn legacy_memory_file_is_readable() -> Result<()> {
    let tmp = tempdir()?;
    let path = tmp.path().join("agent_memory.json");
    std::fs::write(
        &path,
        r#"{
  "preferences": {"style": "brief", "format": "numbered", "language": "en"},
  "sessions": [
    {
      "timestamp": "2025-05-01T14:03:11.482913",
      "audio_file": "meeting_recording.mp3",
      "notes_preview": "Meeting notes",
      "quality_score": 58.33
    }
  ]
}"#,
    )?;

    let mut memory = Memory::open(&path)?;
    assert_eq!(memory.get_preference("language"), "en");
    assert_eq!(memory.sessions()[0].source, "meeting_recording.mp3");

    // unknown keys survive a rewrite
    memory.set_preference("style", "detailed")?;
    let state: PersistedState = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(state.preferences["language"], "en");
    assert_eq!(state.sessions.len(), 1);

    Ok(())
}
