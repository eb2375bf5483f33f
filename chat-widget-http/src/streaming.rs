//! Streaming response consumer.
//!
//! The chat endpoint answers with newline-delimited text. Lines of interest
//! carry a `data: ` prefix followed by a JSON object:
//! ```text
//! data: {"type":"message","content":"Hal"}
//! data: {"type":"message","content":"lo"}
//! data: {"type":"completed_message","content":"Hallo!"}
//! ```
//!
//! `message` frames append to the reply, `completed_message` frames replace
//! it. Every other line is skipped without error.

use bytes::Bytes;
use chat_widget_core::{Accumulator, BackendError, StreamEvent};
use futures::{Stream, StreamExt};

use crate::decoder::Utf8Decoder;

/// Prefix marking a frame line.
pub const DATA_PREFIX: &str = "data: ";

/// Parse one line into a [`StreamEvent`].
///
/// Returns `None` for lines without the `data: ` prefix, for payloads that
/// are not valid JSON, for unknown `type` values and for missing or empty
/// `content`.
pub fn parse_frame(line: &str) -> Option<StreamEvent> {
    let payload = line.strip_prefix(DATA_PREFIX)?;

    let json: serde_json::Value = match serde_json::from_str(payload) {
        Ok(v) => v,
        Err(e) => {
            tracing::trace!(error = %e, "skipping malformed frame");
            return None;
        }
    };

    let content = json["content"].as_str().filter(|c| !c.is_empty())?;
    match json["type"].as_str()? {
        "message" => Some(StreamEvent::Partial(content.to_string())),
        "completed_message" => Some(StreamEvent::Final(content.to_string())),
        other => {
            tracing::trace!(frame_type = other, "skipping unrecognized frame");
            None
        }
    }
}

/// Splits decoded text into lines, holding an incomplete trailing line
/// until the rest of it arrives.
#[derive(Debug, Default)]
pub struct LineFramer {
    buf: String,
}

impl LineFramer {
    /// Create an empty framer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed decoded text and return every line it completes.
    ///
    /// Line terminators (`\n`, optionally preceded by `\r`) are stripped.
    pub fn push(&mut self, text: &str) -> Vec<String> {
        self.buf.push_str(text);

        let mut lines = Vec::new();
        while let Some(newline_pos) = self.buf.find('\n') {
            lines.push(self.buf[..newline_pos].trim_end_matches('\r').to_string());
            self.buf.drain(..=newline_pos);
        }
        lines
    }

    /// Return whatever is left once the stream has ended.
    pub fn finish(&mut self) -> Option<String> {
        let rest = std::mem::take(&mut self.buf);
        let rest = rest.trim_end_matches('\r');
        if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        }
    }
}

/// Turn a raw response body into a stream of [`StreamEvent`]s.
///
/// Chunks are processed strictly in arrival order. A read error ends the
/// stream with one `Err` item; there is no timeout or size cap.
pub fn event_stream<S, E>(byte_stream: S) -> impl Stream<Item = Result<StreamEvent, BackendError>>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: std::fmt::Display,
{
    async_stream::stream! {
        let mut bytes_stream = std::pin::pin!(byte_stream);
        let mut decoder = Utf8Decoder::new();
        let mut framer = LineFramer::new();

        while let Some(chunk_result) = bytes_stream.next().await {
            let chunk = match chunk_result {
                Ok(b) => b,
                Err(e) => {
                    yield Err(BackendError::Stream(e.to_string()));
                    return;
                }
            };

            let text = decoder.decode(&chunk);
            for line in framer.push(&text) {
                if let Some(event) = parse_frame(&line) {
                    yield Ok(event);
                }
            }
        }

        let tail = decoder.finish();
        let mut lines = framer.push(&tail);
        lines.extend(framer.finish());
        for line in lines {
            if let Some(event) = parse_frame(&line) {
                yield Ok(event);
            }
        }
    }
}

/// Read a response body to the end and fold it into the reply text.
///
/// Returns [`chat_widget_core::EMPTY_REPLY_FALLBACK`] when no recognized
/// frame arrived. A read error discards everything accumulated.
pub async fn collect_reply<S, E>(byte_stream: S) -> Result<String, BackendError>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: std::fmt::Display,
{
    let mut acc = Accumulator::new();
    let mut events = std::pin::pin!(event_stream(byte_stream));
    let mut frames = 0usize;
    while let Some(event) = events.next().await {
        acc.apply(event?);
        frames += 1;
    }
    tracing::debug!(frames, "response stream finished");
    Ok(acc.finish())
}
