//! Backend trait for carrying one exchange to the remote endpoint.
//!
//! The [`ChatBackend`] trait uses RPITIT (return-position `impl Trait` in
//! traits) and is NOT object-safe. Widgets are generic over their backend.

use crate::types::ChatRequest;
use std::future::Future;
use thiserror::Error;

/// Errors from a chat backend.
///
/// Every variant is a transport failure from the widget's point of view:
/// the user sees a fixed fallback reply and the cause goes to the log.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BackendError {
    /// The endpoint answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Numeric HTTP status.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The request could not be sent or no response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The response body failed while it was being read.
    #[error("stream read error: {0}")]
    Stream(String),

    /// The request could not be built.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Remote chat endpoint.
///
/// One call is one exchange: send the full history, wait for the whole
/// reply. Implementations never retry.
pub trait ChatBackend: Send + Sync {
    /// Send the history and return the assistant's reply text.
    fn exchange(
        &self,
        request: ChatRequest,
    ) -> impl Future<Output = Result<String, BackendError>> + Send;
}
