use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single saved voice note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Transcribed text, trimmed, never empty
    pub text: String,

    /// When the note was recorded. Absent only for records persisted
    /// before timestamps existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Note {
    pub fn new(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            timestamp: Some(timestamp),
        }
    }

    /// A note stamped with the current time.
    pub fn now(text: impl Into<String>) -> Self {
        Self::new(text, Utc::now())
    }
}

/// On-disk shape of one record: the canonical object, or a bare string
/// left behind by versions that persisted plain text. Bare strings are
/// normalized to `Note` at load time so nothing downstream branches on
/// shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum StoredNote {
    Record {
        text: String,
        #[serde(default)]
        timestamp: Option<DateTime<Utc>>,
    },
    Legacy(String),
}

impl From<StoredNote> for Note {
    fn from(stored: StoredNote) -> Self {
        match stored {
            StoredNote::Record { text, timestamp } => Note { text, timestamp },
            StoredNote::Legacy(text) => Note {
                text,
                timestamp: None,
            },
        }
    }
}
