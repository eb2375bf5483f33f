//! HTTP chat backend struct and builder.

use std::future::Future;

use chat_widget_core::{BackendError, ChatBackend, ChatRequest, WidgetConfig};

use crate::error::{map_http_status, map_reqwest_error};
use crate::streaming::collect_reply;

/// Sub-path appended to the base URL for every exchange.
pub const DEFAULT_CHAT_PATH: &str = "/chat";

/// Default API base URL.
const DEFAULT_BASE_URL: &str = "https://chat.schym.de";

/// Backend that POSTs the conversation to a chat endpoint and consumes its
/// streamed reply.
///
/// Implements [`ChatBackend`] for use anywhere a backend is accepted.
///
/// # Example
///
/// ```no_run
/// use chat_widget_http::HttpBackend;
///
/// let backend = HttpBackend::new().base_url("http://localhost:8080");
/// ```
#[derive(Debug, Clone)]
pub struct HttpBackend {
    /// API base URL, without the chat sub-path.
    pub(crate) base_url: String,
    /// Sub-path of the chat endpoint.
    pub(crate) chat_path: String,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl HttpBackend {
    /// Create a backend pointed at the default endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            chat_path: DEFAULT_CHAT_PATH.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a backend for the widget's configured API URL.
    #[must_use]
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new().base_url(config.api_url.clone())
    }

    /// Override the API base URL.
    ///
    /// A trailing `/` is dropped so the chat path is not doubled.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Override the chat sub-path.
    #[must_use]
    pub fn chat_path(mut self, path: impl Into<String>) -> Self {
        self.chat_path = path.into();
        self
    }

    /// Use a preconfigured HTTP client (proxies, TLS roots, timeouts).
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Full URL of the chat endpoint.
    pub fn chat_url(&self) -> String {
        format!("{}{}", self.base_url, self.chat_path)
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatBackend for HttpBackend {
    /// POST the history as `{"messages": [...]}` and read the streamed reply.
    ///
    /// A non-success status fails before any of the body is read.
    fn exchange(
        &self,
        request: ChatRequest,
    ) -> impl Future<Output = Result<String, BackendError>> + Send {
        let url = self.chat_url();
        let http_client = self.client.clone();

        async move {
            tracing::debug!(url = %url, messages = request.messages.len(), "sending chat request");

            let response = http_client
                .post(&url)
                .header("content-type", "application/json")
                .json(&request)
                .send()
                .await
                .map_err(map_reqwest_error)?;

            let status = response.status();
            if !status.is_success() {
                let body_text = response.text().await.unwrap_or_default();
                return Err(map_http_status(status, &body_text));
            }

            collect_reply(response.bytes_stream()).await
        }
    }
}
