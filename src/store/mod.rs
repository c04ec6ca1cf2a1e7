//! Note persistence
//!
//! An ordered list of notes behind a key-value `Storage` boundary, written
//! through on every mutation and rehydrated once at startup.

mod note;
mod storage;
mod store;

pub use note::Note;
pub use storage::{JsonFileStorage, MemoryStorage, Storage};
pub use store::{NoteStore, STORAGE_KEY};
