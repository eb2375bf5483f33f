//! Append-only conversation log.

use crate::types::{ChatRequest, Message, Role};

/// Ordered record of every message exchanged in one widget instance.
///
/// Insertion order is chronological order and is also the order sent to the
/// remote endpoint. The log only grows: there is no API to edit, remove or
/// reorder entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log seeded with one assistant greeting.
    pub fn with_welcome(text: impl Into<String>) -> Self {
        let mut log = Self::new();
        log.append(Role::Assistant, text);
        log
    }

    /// Add a message at the end of the log.
    pub fn append(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
    }

    /// The whole history, in log order, ready to be sent.
    ///
    /// Always the entire log: no windowing or summarization.
    pub fn to_transmittable(&self) -> Vec<Message> {
        self.messages.clone()
    }

    /// Build the outbound request body for the whole history.
    pub fn to_request(&self) -> ChatRequest {
        ChatRequest::new(self.to_transmittable())
    }

    /// Borrow the messages in log order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Most recent message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
