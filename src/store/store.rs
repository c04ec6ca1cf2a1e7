use anyhow::{Context, Result};
use tracing::{info, warn};

use super::note::{Note, StoredNote};
use super::storage::Storage;

/// Fixed key the note list is persisted under.
pub const STORAGE_KEY: &str = "voice-notes";

/// Durable ordered collection of notes.
///
/// The list is dense (deletion shifts later indices down) and written
/// through to storage after every mutation. Note volume is
/// human-generated and small, so every write serializes the whole list.
pub struct NoteStore {
    storage: Box<dyn Storage>,
    notes: Vec<Note>,
}

impl NoteStore {
    /// Load the persisted note list.
    ///
    /// Absence, a read failure and a parse failure all yield an empty
    /// store; none of them is surfaced past a log line. Legacy bare-string
    /// records are normalized to canonical notes here.
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let notes = match storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<StoredNote>>(&raw) {
                Ok(stored) => stored.into_iter().map(Note::from).collect(),
                Err(e) => {
                    warn!("Discarding unreadable note list: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read persisted notes: {:#}", e);
                Vec::new()
            }
        };

        info!("Loaded {} saved notes", notes.len());

        Self { storage, notes }
    }

    /// Append a note and write through.
    ///
    /// On a write-through failure the note stays in the in-memory list
    /// and the error is returned.
    pub fn append(&mut self, note: Note) -> Result<()> {
        self.notes.push(note);
        self.persist()
    }

    /// Remove the note at `index`, shifting later notes down, and write
    /// through. Returns the removed note.
    ///
    /// Panics when `index` is out of range: callers derive indices from
    /// the current list, so an out-of-range index is a caller bug.
    pub fn delete(&mut self, index: usize) -> Result<Note> {
        let note = self.notes.remove(index);
        self.persist()?;
        Ok(note)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.notes).context("failed to serialize note list")?;
        self.storage.set(STORAGE_KEY, &raw)
    }
}
