//! Speech recognition boundary
//!
//! Recognition runs out-of-process; this module owns the typed edge:
//! - The event model (`RecognitionEvent`) with its cumulative result set
//!   and cursor, matching how continuous engines report increments
//! - The `SpeechBackend` trait and factory
//! - The process backend (external recognizer over a JSON-lines pipe)
//! - The replay backend (scripted events for demos and development)

pub mod backend;
pub mod event;
pub mod process;
pub mod replay;

pub use backend::{RecognizerConfig, SpeechBackend, SpeechBackendFactory, SpeechEngine};
pub use event::{RecognitionErrorKind, RecognitionEvent, RecognitionFragment, ResultEvent};
pub use process::ProcessBackend;
pub use replay::ReplayBackend;
