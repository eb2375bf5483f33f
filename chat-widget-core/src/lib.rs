#![deny(missing_docs)]
//! Core state for the embeddable chat widget.
//!
//! Provides the [`ConversationLog`] that records the exchange, the
//! [`Accumulator`] that folds [`StreamEvent`]s into a reply, the
//! [`ChatBackend`] trait that carries one exchange to a remote endpoint,
//! and the host-facing [`WidgetConfig`].
//!
//! Nothing in this crate performs I/O.

pub mod backend;
pub mod config;
pub mod event;
pub mod log;
pub mod types;

// Re-exports
pub use backend::{BackendError, ChatBackend};
pub use config::{ConfigError, StyleOverrides, Theme, WidgetConfig};
pub use event::{Accumulator, EMPTY_REPLY_FALLBACK, StreamEvent};
pub use log::ConversationLog;
pub use types::{ChatRequest, Message, Role};
