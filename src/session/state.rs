use serde::{Deserialize, Serialize};

/// Recording state of the session.
///
/// Drives which controls are live and whether the transcript panel is
/// shown. There are exactly two states; restarting after a spontaneous
/// stream end is a `Listening` self-transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingState {
    Idle,
    Listening,
}

impl RecordingState {
    pub fn is_listening(&self) -> bool {
        matches!(self, RecordingState::Listening)
    }
}
