//! Render-ready snapshot of a widget.

use std::fmt;

use chat_widget_core::{Message, Role, StyleOverrides, Theme};

/// Everything a renderer needs to draw the widget at one point in time.
///
/// `pending` is the transient loading placeholder. It is derived from the
/// exchange state and is never part of `messages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    /// Title bar text.
    pub title: String,
    /// Input placeholder.
    pub placeholder: String,
    /// Colour scheme.
    pub theme: Theme,
    /// Style overrides per section.
    pub styles: StyleOverrides,
    /// Conversation in display order.
    pub messages: Vec<Message>,
    /// Whether a reply is being waited for.
    pub pending: bool,
}

/// Plain-text transcript, used by terminal front ends.
impl fmt::Display for WidgetView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "── {} ──", self.title)?;
        for message in &self.messages {
            let who = match message.role() {
                Role::User => "du",
                Role::Assistant => "ki",
            };
            writeln!(f, "{who}> {}", message.content())?;
        }
        if self.pending {
            writeln!(f, "ki> ●●●")?;
        }
        Ok(())
    }
}
