#![deny(missing_docs)]
//! Embeddable chat widget.
//!
//! A [`ChatWidget`] owns one conversation. Each [`submit`](ChatWidget::submit)
//! appends the user's text, sends the whole history through a
//! [`ChatBackend`], and appends exactly one assistant reply. Only one exchange
//! runs at a time; a submission made while one is in flight is ignored.
//!
//! ```no_run
//! use chat_widget::{ChatWidget, SubmitOutcome, WidgetConfig};
//!
//! # async fn demo() -> Result<(), chat_widget::ConfigError> {
//! let widget = ChatWidget::mount(WidgetConfig::default().api_url("http://localhost:8080"))?;
//! if let SubmitOutcome::Replied(reply) = widget.submit("Was ist Rust?").await {
//!     println!("{}", reply.content());
//! }
//! # Ok(())
//! # }
//! ```

pub mod view;
pub mod widget;

// Re-exports
pub use chat_widget_core::{
    Accumulator, BackendError, ChatBackend, ChatRequest, ConfigError, ConversationLog,
    EMPTY_REPLY_FALLBACK, Message, Role, StreamEvent, StyleOverrides, Theme, WidgetConfig,
};
pub use chat_widget_http::HttpBackend;
pub use view::WidgetView;
pub use widget::{ChatWidget, ERROR_REPLY_FALLBACK, IgnoreReason, Phase, SubmitOutcome};
