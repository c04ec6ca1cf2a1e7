use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One fragment within the cumulative result set of a recognition stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionFragment {
    /// Transcribed text for this fragment
    pub transcript: String,
    /// Whether the engine has finalized this fragment (it will not be revised)
    #[serde(rename = "final")]
    pub is_final: bool,
}

/// Incremental result event from the engine.
///
/// `results` is the cumulative result set for the session so far;
/// `result_index` is the index of the first fragment changed since the
/// previous event. Consumers must only process fragments from the cursor
/// onward, so fragments finalized by earlier events are never reprocessed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEvent {
    pub result_index: usize,
    pub results: Vec<RecognitionFragment>,
}

/// Error kinds reported by recognition engines.
///
/// Kebab-case strings on the wire; kinds this crate does not know map to
/// `Other` instead of failing the whole event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecognitionErrorKind {
    NoSpeech,
    Aborted,
    AudioCapture,
    Network,
    NotAllowed,
    ServiceNotAllowed,
    Other,
}

impl RecognitionErrorKind {
    fn from_wire(raw: &str) -> Self {
        match raw {
            "no-speech" => RecognitionErrorKind::NoSpeech,
            "aborted" => RecognitionErrorKind::Aborted,
            "audio-capture" => RecognitionErrorKind::AudioCapture,
            "network" => RecognitionErrorKind::Network,
            "not-allowed" => RecognitionErrorKind::NotAllowed,
            "service-not-allowed" => RecognitionErrorKind::ServiceNotAllowed,
            _ => RecognitionErrorKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecognitionErrorKind::NoSpeech => "no-speech",
            RecognitionErrorKind::Aborted => "aborted",
            RecognitionErrorKind::AudioCapture => "audio-capture",
            RecognitionErrorKind::Network => "network",
            RecognitionErrorKind::NotAllowed => "not-allowed",
            RecognitionErrorKind::ServiceNotAllowed => "service-not-allowed",
            RecognitionErrorKind::Other => "other",
        }
    }
}

impl<'de> Deserialize<'de> for RecognitionErrorKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(RecognitionErrorKind::from_wire(&raw))
    }
}

impl fmt::Display for RecognitionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Events delivered by a speech backend, strictly in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RecognitionEvent {
    /// Incremental transcription results
    Result(ResultEvent),
    /// Recognition failed; the stream is over
    Error {
        kind: RecognitionErrorKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// The engine terminated the stream
    End,
}
