//! The widget instance and its submit pipeline.
//!
//! State moves `Idle → Sending → Idle` once per exchange. The log and the
//! phase share one lock that is never held across an `.await`, so a second
//! `submit` on the same instance sees `Sending` and backs off.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chat_widget_core::{ChatBackend, ConfigError, ConversationLog, Message, Role, WidgetConfig};
use chat_widget_http::HttpBackend;

use crate::view::WidgetView;

/// Reply shown when an exchange fails (network error, non-2xx status, broken
/// stream). The cause goes to the log, not to the user.
pub const ERROR_REPLY_FALLBACK: &str =
    "Entschuldigung, es gab einen Fehler. Bitte versuche es erneut.";

/// Exchange state of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ready to accept a submission.
    Idle,
    /// An exchange is in flight.
    Sending,
}

/// Why a submission did not start an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The input was empty after trimming.
    Empty,
    /// Another exchange is still in flight.
    Busy,
}

/// Result of [`ChatWidget::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The exchange ran; this is the assistant message appended to the log.
    Replied(Message),
    /// Nothing happened. The log is unchanged.
    Ignored(IgnoreReason),
}

#[derive(Debug)]
struct Session {
    log: ConversationLog,
    phase: Phase,
}

/// One mounted chat widget.
///
/// Each instance owns its own conversation; several widgets can live side by
/// side.
pub struct ChatWidget<B> {
    config: WidgetConfig,
    backend: B,
    session: Mutex<Session>,
}

impl ChatWidget<HttpBackend> {
    /// Initialize a widget that talks to `config.api_url` over HTTP.
    pub fn mount(config: WidgetConfig) -> Result<Self, ConfigError> {
        let backend = HttpBackend::from_config(&config);
        Self::init(config, backend)
    }
}

impl<B: ChatBackend> ChatWidget<B> {
    /// Initialize a widget with an explicit backend.
    ///
    /// Validates the configuration and seeds the welcome message, if any.
    pub fn init(config: WidgetConfig, backend: B) -> Result<Self, ConfigError> {
        config.validate()?;

        let log = match config.welcome() {
            Some(text) => ConversationLog::with_welcome(text),
            None => ConversationLog::new(),
        };
        tracing::info!(
            container = %config.container,
            api_url = %config.api_url,
            "chat widget initialized"
        );

        Ok(Self {
            config,
            backend,
            session: Mutex::new(Session {
                log,
                phase: Phase::Idle,
            }),
        })
    }

    /// Submit user input and wait for the reply.
    ///
    /// Empty input and input arriving while another exchange is in flight
    /// are ignored without touching the log. Otherwise the user message is
    /// appended, the full history is sent, and exactly one assistant message
    /// is appended: the reply, or [`ERROR_REPLY_FALLBACK`] if the exchange
    /// failed.
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        let content = input.trim();
        if content.is_empty() {
            return SubmitOutcome::Ignored(IgnoreReason::Empty);
        }

        let request = {
            let mut session = self.lock();
            if session.phase == Phase::Sending {
                tracing::debug!("submission ignored: exchange in flight");
                return SubmitOutcome::Ignored(IgnoreReason::Busy);
            }
            session.log.append(Role::User, content);
            session.phase = Phase::Sending;
            session.log.to_request()
        };
        // Back to Idle on every exit path, including panics and drops.
        let _sending = SendingGuard {
            session: &self.session,
        };

        let reply = match self.backend.exchange(request).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "chat exchange failed");
                ERROR_REPLY_FALLBACK.to_string()
            }
        };

        let message = Message::assistant(reply);
        self.lock().log.append(message.role(), message.content());
        SubmitOutcome::Replied(message)
    }

    /// Current exchange state.
    pub fn phase(&self) -> Phase {
        self.lock().phase
    }

    /// Whether an exchange is in flight.
    pub fn is_busy(&self) -> bool {
        self.phase() == Phase::Sending
    }

    /// Copy of the conversation so far.
    pub fn transcript(&self) -> Vec<Message> {
        self.lock().log.to_transmittable()
    }

    /// Number of messages in the conversation.
    pub fn len(&self) -> usize {
        self.lock().log.len()
    }

    /// Whether the conversation is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().log.is_empty()
    }

    /// Configuration the widget was initialized with.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Backend used for exchanges.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Snapshot of everything a renderer needs.
    pub fn view(&self) -> WidgetView {
        let session = self.lock();
        WidgetView {
            title: self.config.title.clone(),
            placeholder: self.config.placeholder.clone(),
            theme: self.config.theme,
            styles: self.config.styles.clone(),
            messages: session.log.to_transmittable(),
            pending: session.phase == Phase::Sending,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Resets the phase to `Idle` when the submit future finishes or is dropped.
struct SendingGuard<'a> {
    session: &'a Mutex<Session>,
}

impl Drop for SendingGuard<'_> {
    fn drop(&mut self) {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .phase = Phase::Idle;
    }
}
