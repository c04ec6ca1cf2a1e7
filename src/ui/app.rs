use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use super::render;
use crate::session::{SessionController, SessionUpdate};

/// Interactive console frontend.
///
/// One loop multiplexes typed commands and recognition events, so all
/// session state is touched from a single point of control.
pub struct App {
    controller: SessionController,
}

impl App {
    pub fn new(controller: SessionController) -> Self {
        Self { controller }
    }

    /// Run the command loop until EOF or `quit`.
    pub async fn run(&mut self) -> Result<()> {
        println!("{}", render::APP_TITLE);
        println!("Record your thoughts with timestamps.");
        println!();
        render::render_notes(&mut std::io::stdout(), self.controller.store().notes())?;
        println!();
        self.print_help();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    match line? {
                        Some(line) => {
                            if !self.handle_command(line.trim()).await? {
                                break;
                            }
                        }
                        None => break, // stdin closed
                    }
                }
                event = self.controller.next_event() => {
                    let update = self.controller.handle_event(event).await;
                    self.render_update(update)?;
                }
            }
        }

        // Same semantics as `stop` on the way out: captured speech is
        // committed, not dropped.
        if self.controller.state().is_listening() {
            self.finish_recording().await;
        }

        Ok(())
    }

    /// Dispatch one typed command. Returns `false` when the loop should end.
    async fn handle_command(&mut self, command: &str) -> Result<bool> {
        let mut parts = command.split_whitespace();

        match parts.next() {
            None => {}
            Some("start") => self.start_recording().await,
            Some("stop") => self.finish_recording().await,
            Some("list") => {
                render::render_notes(&mut std::io::stdout(), self.controller.store().notes())?;
            }
            Some("delete") => self.delete_note(parts.next()),
            Some("help") => self.print_help(),
            Some("quit") | Some("exit") => return Ok(false),
            Some(other) => println!("Unknown command `{}`; type `help`.", other),
        }

        Ok(true)
    }

    async fn start_recording(&mut self) {
        if self.controller.state().is_listening() {
            println!("Already recording; `stop` to finish.");
            return;
        }

        match self.controller.start().await {
            Ok(()) => println!("● Recording. Speak now; `stop` to finish."),
            Err(e) => println!("Voice input error: {:#}", e),
        }
    }

    async fn finish_recording(&mut self) {
        if !self.controller.state().is_listening() {
            println!("Not recording; `start` to begin.");
            return;
        }

        println!(); // leave the transcript line behind

        match self.controller.stop().await {
            Some(note) => println!("Saved: {}", note.text),
            None => println!("Nothing captured; no note saved."),
        }
    }

    /// Indices come from the rendered list; anything else is user typo,
    /// rejected here so the store never sees an out-of-range index.
    fn delete_note(&mut self, arg: Option<&str>) {
        match arg.and_then(|raw| raw.parse::<usize>().ok()) {
            Some(index) if index < self.controller.store().len() => {
                match self.controller.store_mut().delete(index) {
                    Ok(note) => println!("Deleted note [{}]: {}", index, note.text),
                    Err(e) => println!("Note removed but could not be persisted: {:#}", e),
                }
            }
            Some(index) => println!("No note at index {}.", index),
            None => println!("Usage: delete <index>"),
        }
    }

    fn render_update(&mut self, update: Option<SessionUpdate>) -> Result<()> {
        match update {
            Some(SessionUpdate::Transcript) => {
                render::draw_transcript(&mut std::io::stdout(), self.controller.transcript())?;
            }
            Some(SessionUpdate::Error(kind)) => {
                println!();
                println!("Voice input error: {}", kind);
            }
            Some(SessionUpdate::Restarted) => {
                debug!("Recognition stream restarted");
            }
            Some(SessionUpdate::RestartFailed) => {
                println!();
                println!("Recognition stream ended and could not be restarted.");
            }
            None => {}
        }

        Ok(())
    }

    fn print_help(&self) {
        println!("Commands: start, stop, list, delete <index>, help, quit");
    }
}
