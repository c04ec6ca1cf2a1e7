use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use super::state::RecordingState;
use super::transcript::TranscriptBuffer;
use crate::speech::{RecognitionErrorKind, RecognitionEvent, SpeechBackend};
use crate::store::{Note, NoteStore};

/// Outcome of folding one recognition event, for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    /// The live transcript changed
    Transcript,
    /// Recognition reported an error; the session is now idle
    Error(RecognitionErrorKind),
    /// The stream ended spontaneously and was restarted transparently
    Restarted,
    /// The stream ended and could not be restarted; the session is now idle
    RestartFailed,
}

/// Drives the recognition stream lifecycle and folds its events into the
/// transcript buffer; on stop, commits the captured text to the note store.
///
/// State machine: `Idle → (start) → Listening → (stop | error) → Idle`;
/// a spontaneous stream end while listening triggers exactly one restart
/// attempt, falling back to `Idle` if the restart fails.
pub struct SessionController {
    backend: Box<dyn SpeechBackend>,
    store: NoteStore,
    buffer: TranscriptBuffer,
    state: RecordingState,
    events: Option<mpsc::Receiver<RecognitionEvent>>,
    session_id: String,
}

impl SessionController {
    pub fn new(backend: Box<dyn SpeechBackend>, store: NoteStore) -> Self {
        Self {
            backend,
            store,
            buffer: TranscriptBuffer::new(),
            state: RecordingState::Idle,
            events: None,
            session_id: format!("note-session-{}", uuid::Uuid::new_v4()),
        }
    }

    /// Start a recognition stream. No-op when already listening.
    ///
    /// On backend failure the session stays idle and the error is
    /// returned so the caller can show it; the captured state is exactly
    /// as if recording never began.
    pub async fn start(&mut self) -> Result<()> {
        if self.state.is_listening() {
            warn!("Recording already started");
            return Ok(());
        }

        self.buffer.clear();

        match self.backend.start().await {
            Ok(rx) => {
                self.events = Some(rx);
                self.state = RecordingState::Listening;
                info!(
                    "Recording started ({} backend, session {})",
                    self.backend.name(),
                    self.session_id
                );
                Ok(())
            }
            Err(e) => {
                self.events = None;
                self.state = RecordingState::Idle;
                error!("Could not start recognition: {:#}", e);
                Err(e)
            }
        }
    }

    /// Stop the session and commit the accumulated transcript as a note.
    ///
    /// Commit and stream shutdown are independent steps: a failed stop on
    /// the backend is logged and never discards captured text. Returns
    /// the committed note, or `None` when nothing usable was captured.
    pub async fn stop(&mut self) -> Option<Note> {
        self.state = RecordingState::Idle;
        self.events = None;

        if let Err(e) = self.backend.stop().await {
            warn!("Failed to stop recognition stream: {:#}", e);
        }

        let committed = self.buffer.committed_text().map(|text| {
            let note = Note::now(text);
            if let Err(e) = self.store.append(note.clone()) {
                error!("Failed to persist note: {:#}", e);
            }
            note
        });

        self.buffer.clear();

        match &committed {
            Some(note) => info!("Recording stopped, note saved ({} chars)", note.text.len()),
            None => info!("Recording stopped, nothing captured"),
        }

        committed
    }

    /// Next event from the active stream.
    ///
    /// A closed channel is reported as `End` (the engine went away without
    /// saying goodbye). Pends forever while no stream is active, so this
    /// can sit in a `select!` unconditionally.
    pub async fn next_event(&mut self) -> RecognitionEvent {
        match self.events.as_mut() {
            Some(rx) => rx.recv().await.unwrap_or(RecognitionEvent::End),
            None => std::future::pending().await,
        }
    }

    /// Fold one recognition event into session state.
    ///
    /// Returns what changed, or `None` when the event required no action
    /// (an `End` after the session already went idle).
    pub async fn handle_event(&mut self, event: RecognitionEvent) -> Option<SessionUpdate> {
        match event {
            RecognitionEvent::Result(result) => {
                self.buffer.absorb(&result);
                Some(SessionUpdate::Transcript)
            }
            RecognitionEvent::Error { kind, message } => {
                error!(
                    "Recognition error: {} ({})",
                    kind,
                    message.as_deref().unwrap_or("no detail")
                );
                self.state = RecordingState::Idle;
                self.events = None;
                Some(SessionUpdate::Error(kind))
            }
            RecognitionEvent::End => {
                if !self.state.is_listening() {
                    return None;
                }

                // The engine hung up while the user still wants to record
                // (silence timeout and the like): restart once.
                match self.backend.start().await {
                    Ok(rx) => {
                        self.events = Some(rx);
                        info!("Recognition stream restarted");
                        Some(SessionUpdate::Restarted)
                    }
                    Err(e) => {
                        error!("Could not restart recognition: {:#}", e);
                        self.events = None;
                        self.state = RecordingState::Idle;
                        Some(SessionUpdate::RestartFailed)
                    }
                }
            }
        }
    }

    pub fn state(&self) -> RecordingState {
        self.state
    }

    pub fn transcript(&self) -> &TranscriptBuffer {
        &self.buffer
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut NoteStore {
        &mut self.store
    }
}
