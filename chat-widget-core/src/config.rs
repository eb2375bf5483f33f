//! Host-facing widget configuration.
//!
//! Accepts the same JSON object a host page hands to the widget's `init`
//! call. Missing fields fall back to defaults, so a partial object merges
//! over [`WidgetConfig::default`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Errors from building or validating a [`WidgetConfig`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration JSON could not be parsed.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// No container selector was given, so there is nothing to mount into.
    #[error("container selector is empty")]
    MissingContainer,

    /// The API base URL is not an absolute http(s) URL.
    #[error("invalid api url {url:?}: {reason}")]
    InvalidApiUrl {
        /// The rejected value.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Colour scheme requested by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background, dark text.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

/// Per-section style overrides, appended verbatim by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleOverrides {
    /// Outer widget box.
    pub container: Option<String>,
    /// Title bar.
    pub header: Option<String>,
    /// Scrolling transcript area.
    pub messages: Option<String>,
    /// Area holding the input and send button.
    pub input_area: Option<String>,
    /// Text input.
    pub input: Option<String>,
    /// Send button.
    pub send_button: Option<String>,
}

/// Configuration consumed once when a widget is initialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Selector of the host element the widget mounts into.
    pub container: String,
    /// Base URL of the chat endpoint; `/chat` is appended per request.
    pub api_url: String,
    /// Colour scheme.
    pub theme: Theme,
    /// Placeholder shown in the empty input.
    pub placeholder: String,
    /// Title bar text.
    pub title: String,
    /// Greeting seeded into the log. `None` or empty means no greeting.
    pub welcome_message: Option<String>,
    /// Style overrides per section.
    pub styles: StyleOverrides,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            container: "#schym-chat".into(),
            api_url: "https://chat.schym.de".into(),
            theme: Theme::Light,
            placeholder: "Stelle eine Frage...".into(),
            title: "Chat mit KI".into(),
            welcome_message: Some("Hallo! Wie kann ich dir helfen?".into()),
            styles: StyleOverrides::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse a host configuration object, merging it over the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the container selector.
    #[must_use]
    pub fn container(mut self, selector: impl Into<String>) -> Self {
        self.container = selector.into();
        self
    }

    /// Set the API base URL.
    #[must_use]
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the theme.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the input placeholder.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Set the title text.
    #[must_use]
    pub fn title(mut self, text: impl Into<String>) -> Self {
        self.title = text.into();
        self
    }

    /// Set or clear the welcome message.
    #[must_use]
    pub fn welcome_message(mut self, text: Option<String>) -> Self {
        self.welcome_message = text;
        self
    }

    /// Replace the style overrides.
    #[must_use]
    pub fn styles(mut self, styles: StyleOverrides) -> Self {
        self.styles = styles;
        self
    }

    /// Greeting to seed, if one is configured and non-empty.
    pub fn welcome(&self) -> Option<&str> {
        self.welcome_message.as_deref().filter(|s| !s.is_empty())
    }

    /// Check that the widget can be mounted with this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.container.trim().is_empty() {
            return Err(ConfigError::MissingContainer);
        }

        let invalid = |reason: String| ConfigError::InvalidApiUrl {
            url: self.api_url.clone(),
            reason,
        };
        let url = Url::parse(&self.api_url).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme {other:?}"))),
        }
    }
}
