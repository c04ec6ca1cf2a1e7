use chrono::Local;
use std::io::{self, Write};

use crate::session::TranscriptBuffer;
use crate::store::Note;

pub const APP_TITLE: &str = "Voice Notes";
pub const EMPTY_STATE: &str = "No notes yet. Type `start` to record one.";

const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";
const CLEAR_TO_EOL: &str = "\x1b[K";

/// Label shown with a note: its timestamp rendered in local time, or the
/// positional fallback for records persisted before timestamps existed.
pub fn note_label(note: &Note, index: usize) -> String {
    match note.timestamp {
        Some(ts) => ts.with_timezone(&Local).format("%c").to_string(),
        None => format!("Note {}", index + 1),
    }
}

/// Live transcript as one line: finalized text first, then the current
/// interim tail dimmed so provisional words read as provisional.
pub fn transcript_line(buffer: &TranscriptBuffer) -> String {
    if buffer.interim_text().is_empty() {
        buffer.final_text().to_string()
    } else {
        format!(
            "{}{}{}{}",
            buffer.final_text(),
            DIM,
            buffer.interim_text(),
            RESET
        )
    }
}

/// Redraw the recording line in place.
pub fn draw_transcript(out: &mut impl Write, buffer: &TranscriptBuffer) -> io::Result<()> {
    write!(out, "\r● {}{}", transcript_line(buffer), CLEAR_TO_EOL)?;
    out.flush()
}

/// Render the note list, or the empty-state message.
pub fn render_notes(out: &mut impl Write, notes: &[Note]) -> io::Result<()> {
    writeln!(out, "Your notes:")?;

    if notes.is_empty() {
        writeln!(out, "  {}", EMPTY_STATE)?;
        return Ok(());
    }

    for (index, note) in notes.iter().enumerate() {
        writeln!(out, "  [{}] {}", index, note_label(note, index))?;
        writeln!(out, "      {}", note.text)?;
    }

    Ok(())
}
