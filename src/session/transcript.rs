use crate::speech::ResultEvent;

/// Working buffer for the transcript of the active recording.
///
/// Finalized text only grows; the interim tail is replaced wholesale on
/// every result event. Neither side is persisted; the buffer is cleared
/// at recording start and after its contents are committed as a note.
#[derive(Debug, Clone, Default)]
pub struct TranscriptBuffer {
    final_text: String,
    interim_text: String,
}

impl TranscriptBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one result event into the buffer.
    ///
    /// Only fragments from the event's cursor onward are processed;
    /// earlier fragments were absorbed by previous events and are never
    /// reprocessed, so folding is idempotent per event.
    pub fn absorb(&mut self, event: &ResultEvent) {
        let mut interim = String::new();

        for fragment in event.results.iter().skip(event.result_index) {
            if fragment.is_final {
                self.final_text.push_str(&fragment.transcript);
                self.final_text.push(' ');
            } else {
                interim.push_str(&fragment.transcript);
            }
        }

        self.interim_text = interim;
    }

    /// Accumulated finalized text, space-joined, trailing space included.
    pub fn final_text(&self) -> &str {
        &self.final_text
    }

    /// Latest interim fragment concatenation, shown for live feedback.
    pub fn interim_text(&self) -> &str {
        &self.interim_text
    }

    /// Text that would be committed as a note right now: the trimmed
    /// finalized accumulation, or `None` when nothing usable was captured.
    /// Interim text is provisional and never committed.
    pub fn committed_text(&self) -> Option<String> {
        let trimmed = self.final_text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        self.final_text.is_empty() && self.interim_text.is_empty()
    }

    pub fn clear(&mut self) {
        self.final_text.clear();
        self.interim_text.clear();
    }
}
