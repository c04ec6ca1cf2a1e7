use anyhow::{Context, Result};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tracing::{info, warn};

use super::backend::{RecognizerConfig, SpeechBackend};
use super::event::RecognitionEvent;

/// How long a stopped engine gets to exit on its own before being killed.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// Backend that drives an external recognizer process.
///
/// Protocol: the session's `RecognizerConfig` is written to the engine's
/// stdin as a single JSON line; the engine writes one JSON
/// `RecognitionEvent` per stdout line. Closing stdin asks the engine to
/// wind down. Engine exit is surfaced as an `End` event.
pub struct ProcessBackend {
    command: Vec<String>,
    config: RecognizerConfig,
    child: Option<Child>,
    listening: bool,
}

impl ProcessBackend {
    pub fn new(command: Vec<String>, config: RecognizerConfig) -> Result<Self> {
        if command.is_empty() {
            anyhow::bail!(
                "no speech recognizer configured; set speech.recognizer in the \
                 config file or pass --replay"
            );
        }

        Ok(Self {
            command,
            config,
            child: None,
            listening: false,
        })
    }
}

#[async_trait::async_trait]
impl SpeechBackend for ProcessBackend {
    async fn start(&mut self) -> Result<mpsc::Receiver<RecognitionEvent>> {
        // A previous stream's engine may still be winding down; it is
        // killed and reaped via kill_on_drop.
        drop(self.child.take());

        let program = &self.command[0];
        let mut child = Command::new(program)
            .args(&self.command[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to launch recognizer: {}", program))?;

        info!("Launched recognizer: {}", program);

        // Hand the engine its session parameters as the first stdin line
        let mut stdin = child.stdin.take().context("recognizer stdin unavailable")?;
        let directive = serde_json::to_string(&self.config)?;
        stdin
            .write_all(directive.as_bytes())
            .await
            .context("failed to send session config to recognizer")?;
        stdin.write_all(b"\n").await?;
        stdin.flush().await?;

        // Keep stdin open for the lifetime of the stream; stop() closes it
        child.stdin = Some(stdin);

        let stdout = child.stdout.take().context("recognizer stdout unavailable")?;
        let (tx, rx) = mpsc::channel(64);

        // Pump engine output into the event channel
        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();

            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        let line = line.trim();
                        if line.is_empty() {
                            continue;
                        }

                        match serde_json::from_str::<RecognitionEvent>(line) {
                            Ok(event) => {
                                let ended = matches!(event, RecognitionEvent::End);
                                if tx.send(event).await.is_err() {
                                    break; // receiver gone, stream abandoned
                                }
                                if ended {
                                    break;
                                }
                            }
                            Err(e) => {
                                warn!("Ignoring malformed recognizer event: {}", e);
                            }
                        }
                    }
                    Ok(None) => {
                        // Engine exited without an explicit end event
                        let _ = tx.send(RecognitionEvent::End).await;
                        break;
                    }
                    Err(e) => {
                        warn!("Failed to read from recognizer: {}", e);
                        let _ = tx.send(RecognitionEvent::End).await;
                        break;
                    }
                }
            }
        });

        self.child = Some(child);
        self.listening = true;

        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        self.listening = false;

        let Some(mut child) = self.child.take() else {
            return Ok(());
        };

        // Closing stdin asks the engine to finish its stream
        drop(child.stdin.take());

        match tokio::time::timeout(SHUTDOWN_GRACE, child.wait()).await {
            Ok(status) => {
                let status = status.context("failed to wait for recognizer")?;
                if !status.success() {
                    warn!("Recognizer exited with status {}", status);
                }
            }
            Err(_) => {
                warn!("Recognizer ignored shutdown, killing it");
                child.kill().await.context("failed to kill recognizer")?;
            }
        }

        Ok(())
    }

    fn is_listening(&self) -> bool {
        self.listening
    }

    fn name(&self) -> &str {
        "process"
    }
}
