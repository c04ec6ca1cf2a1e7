use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use super::backend::{RecognizerConfig, SpeechBackend};
use super::event::RecognitionEvent;

/// One line of a replay script: either a recognition event or a pacing
/// directive (`{"pause_ms": 250}`). Lines starting with `#` are comments.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScriptLine {
    Pause { pause_ms: u64 },
    Event(RecognitionEvent),
}

/// Backend that replays recognition events from a JSON-lines script.
///
/// After the script is exhausted the stream stays open, like an engine
/// listening to silence, until `stop` is called. A script that should end
/// the stream includes an explicit `{"event": "end"}` line.
pub struct ReplayBackend {
    path: PathBuf,
    config: RecognizerConfig,
    feeder: Option<JoinHandle<()>>,
    listening: bool,
}

impl ReplayBackend {
    pub fn new(path: PathBuf, config: RecognizerConfig) -> Self {
        Self {
            path,
            config,
            feeder: None,
            listening: false,
        }
    }
}

#[async_trait::async_trait]
impl SpeechBackend for ReplayBackend {
    async fn start(&mut self) -> Result<mpsc::Receiver<RecognitionEvent>> {
        if let Some(feeder) = self.feeder.take() {
            feeder.abort();
        }

        let script = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read replay script {}", self.path.display()))?;

        let entries = script
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| serde_json::from_str::<ScriptLine>(line).context("malformed script line"))
            .collect::<Result<Vec<_>>>()?;

        info!(
            "Replaying {} script entries from {} (language {})",
            entries.len(),
            self.path.display(),
            self.config.language
        );

        let interim_results = self.config.interim_results;
        let (tx, rx) = mpsc::channel(64);

        let feeder = tokio::spawn(async move {
            for entry in entries {
                match entry {
                    ScriptLine::Pause { pause_ms } => {
                        tokio::time::sleep(Duration::from_millis(pause_ms)).await;
                    }
                    ScriptLine::Event(event) => {
                        // Engines only send interim fragments when asked to
                        if !interim_results {
                            if let RecognitionEvent::Result(ref result) = event {
                                if result.results.iter().all(|f| !f.is_final) {
                                    continue;
                                }
                            }
                        }

                        let ended = matches!(event, RecognitionEvent::End);
                        if tx.send(event).await.is_err() {
                            return;
                        }
                        if ended {
                            return;
                        }
                    }
                }
            }

            // Script exhausted: hold the stream open until stopped
            std::future::pending::<()>().await;
        });

        self.feeder = Some(feeder);
        self.listening = true;

        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        self.listening = false;
        if let Some(feeder) = self.feeder.take() {
            feeder.abort();
        }
        Ok(())
    }

    fn is_listening(&self) -> bool {
        self.listening
    }

    fn name(&self) -> &str {
        "replay"
    }
}

impl Drop for ReplayBackend {
    fn drop(&mut self) {
        if let Some(feeder) = self.feeder.take() {
            feeder.abort();
        }
    }
}
