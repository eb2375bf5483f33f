//! Streaming events and the per-request reply accumulator.

/// Reply used when a stream finishes without any recognized frame.
pub const EMPTY_REPLY_FALLBACK: &str = "Keine Antwort erhalten.";

/// One decoded frame of a streaming response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// Incremental text (wire type `message`). Appended to the accumulator.
    Partial(String),
    /// Authoritative text (wire type `completed_message`). Replaces the
    /// accumulator.
    Final(String),
}

/// Folds [`StreamEvent`]s into the reply for a single request.
///
/// Created empty at the start of a request and consumed by
/// [`finish`](Accumulator::finish) when the stream ends.
#[derive(Debug, Default)]
pub struct Accumulator {
    text: String,
}

impl Accumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event.
    ///
    /// A `Final` event replaces everything accumulated so far; later
    /// `Partial` events append to the replaced text.
    pub fn apply(&mut self, event: StreamEvent) {
        match event {
            StreamEvent::Partial(text) => self.text.push_str(&text),
            StreamEvent::Final(text) => self.text = text,
        }
    }

    /// Consume the accumulator and produce the reply.
    ///
    /// Returns [`EMPTY_REPLY_FALLBACK`] when nothing was accumulated.
    pub fn finish(self) -> String {
        if self.text.is_empty() {
            EMPTY_REPLY_FALLBACK.to_string()
        } else {
            self.text
        }
    }
}

impl Extend<StreamEvent> for Accumulator {
    fn extend<T: IntoIterator<Item = StreamEvent>>(&mut self, iter: T) {
        for event in iter {
            self.apply(event);
        }
    }
}
