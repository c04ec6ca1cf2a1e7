//! Recording session management
//!
//! This module provides the `SessionController` abstraction that manages:
//! - Recognition stream lifecycle (start, stop, restart-on-end)
//! - Folding incremental results into the transcript buffer
//! - Recording state for the presentation layer
//! - Committing finished transcripts to the note store

mod controller;
mod state;
mod transcript;

pub use controller::{SessionController, SessionUpdate};
pub use state::RecordingState;
pub use transcript::TranscriptBuffer;
