use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::mpsc;

use super::event::RecognitionEvent;
use super::process::ProcessBackend;
use super::replay::ReplayBackend;

/// Session parameters handed to the recognition engine at stream start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Keep the stream open across pauses instead of ending after the first utterance
    pub continuous: bool,
    /// Deliver provisional fragments while the speaker is still talking
    pub interim_results: bool,
    /// BCP-47 language tag for recognition
    pub language: String,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            continuous: true,
            interim_results: true,
            language: "en-US".to_string(),
        }
    }
}

/// Speech recognition backend trait
///
/// A backend owns at most one active recognition stream. Events are
/// delivered strictly in emission order on the channel returned by
/// `start`. The channel closing is equivalent to an `End` event: the
/// engine went away without saying goodbye.
#[async_trait::async_trait]
pub trait SpeechBackend: Send {
    /// Begin a recognition stream
    ///
    /// Returns a channel receiver that will receive recognition events.
    /// Calling `start` again after the stream ended opens a fresh stream.
    async fn start(&mut self) -> Result<mpsc::Receiver<RecognitionEvent>>;

    /// Stop the active recognition stream
    async fn stop(&mut self) -> Result<()>;

    /// Check if a stream is currently active
    fn is_listening(&self) -> bool;

    /// Get backend name for logging
    fn name(&self) -> &str;
}

/// Recognition engine selection
#[derive(Debug, Clone)]
pub enum SpeechEngine {
    /// External recognizer process speaking the JSON-lines event protocol
    Process { command: Vec<String> },
    /// Replay events from a script file (demos, development without an engine)
    Replay(PathBuf),
}

/// Speech backend factory
pub struct SpeechBackendFactory;

impl SpeechBackendFactory {
    /// Create a backend for the selected engine
    pub fn create(engine: SpeechEngine, config: RecognizerConfig) -> Result<Box<dyn SpeechBackend>> {
        match engine {
            SpeechEngine::Process { command } => {
                Ok(Box::new(ProcessBackend::new(command, config)?))
            }
            SpeechEngine::Replay(path) => Ok(Box::new(ReplayBackend::new(path, config))),
        }
    }
}
