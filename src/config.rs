use anyhow::Result;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;

use crate::speech::RecognizerConfig;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub speech: SpeechConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// External recognizer command in argv form, e.g.
    /// `["my-recognizer", "--mic", "default"]`. Empty means unconfigured.
    pub recognizer: Vec<String>,

    /// BCP-47 language tag passed to the engine
    pub language: String,

    /// Keep the stream open across pauses
    pub continuous: bool,

    /// Ask the engine for provisional results while the speaker talks
    pub interim_results: bool,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        let defaults = RecognizerConfig::default();
        Self {
            recognizer: Vec::new(),
            language: defaults.language,
            continuous: defaults.continuous,
            interim_results: defaults.interim_results,
        }
    }
}

impl SpeechConfig {
    pub fn recognizer_config(&self) -> RecognizerConfig {
        RecognizerConfig {
            continuous: self.continuous,
            interim_results: self.interim_results,
            language: self.language.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory the note list is persisted in
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let path = ProjectDirs::from("", "", "voice-notes")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".voice-notes"));
        Self { path }
    }
}

impl Config {
    /// Load configuration from a TOML file; every field has a default, so
    /// a missing file just means defaults.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
