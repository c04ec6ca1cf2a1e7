pub mod config;
pub mod session;
pub mod speech;
pub mod store;
pub mod ui;

pub use config::Config;
pub use session::{RecordingState, SessionController, SessionUpdate, TranscriptBuffer};
pub use speech::{
    RecognitionErrorKind, RecognitionEvent, RecognitionFragment, RecognizerConfig, ResultEvent,
    SpeechBackend, SpeechBackendFactory, SpeechEngine,
};
pub use store::{JsonFileStorage, MemoryStorage, Note, NoteStore, Storage, STORAGE_KEY};
