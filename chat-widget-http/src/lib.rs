#![deny(missing_docs)]
//! Streaming HTTP backend for the chat widget.
//!
//! Implements [`chat_widget_core::ChatBackend`] by POSTing the conversation to
//! `{base_url}/chat` and folding the `data: `-framed response body into a
//! single reply.

mod client;
mod decoder;
mod error;
pub mod streaming;

pub use client::{DEFAULT_CHAT_PATH, HttpBackend};
pub use decoder::Utf8Decoder;
pub use streaming::{LineFramer, collect_reply, event_stream, parse_frame};
