// Unit tests for configuration loading

use anyhow::Result;
use std::io::Write;
use tempfile::TempDir;
use voice_notes::Config;

#[test]
fn test_missing_file_falls_back_to_defaults() -> Result<()> {
    let cfg = Config::load("does/not/exist/voice-notes")?;

    assert!(cfg.speech.recognizer.is_empty());
    assert_eq!(cfg.speech.language, "en-US");
    assert!(cfg.speech.continuous);
    assert!(cfg.speech.interim_results);

    Ok(())
}

#[test]
fn test_file_values_override_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("voice-notes.toml");

    let mut file = std::fs::File::create(&path)?;
    writeln!(
        file,
        r#"
[speech]
recognizer = ["my-engine", "--device", "pipewire"]
language = "en-GB"
interim_results = false

[storage]
path = "/tmp/voice-notes-test"
"#
    )?;

    let stem = dir.path().join("voice-notes");
    let cfg = Config::load(stem.to_str().unwrap())?;

    assert_eq!(
        cfg.speech.recognizer,
        vec!["my-engine", "--device", "pipewire"]
    );
    assert_eq!(cfg.speech.language, "en-GB");
    assert!(cfg.speech.continuous, "unset fields keep their defaults");
    assert!(!cfg.speech.interim_results);
    assert_eq!(cfg.storage.path.to_str(), Some("/tmp/voice-notes-test"));

    Ok(())
}

#[test]
fn test_recognizer_config_reflects_speech_section() -> Result<()> {
    let cfg = Config::load("does/not/exist/voice-notes")?;
    let recognizer = cfg.speech.recognizer_config();

    assert!(recognizer.continuous);
    assert!(recognizer.interim_results);
    assert_eq!(recognizer.language, "en-US");

    Ok(())
}
