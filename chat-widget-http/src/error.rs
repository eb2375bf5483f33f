//! Internal error helpers for mapping HTTP/reqwest errors to [`BackendError`].

use chat_widget_core::BackendError;

/// Map a non-success HTTP status from the chat endpoint to a [`BackendError`].
pub(crate) fn map_http_status(status: reqwest::StatusCode, body: &str) -> BackendError {
    BackendError::Status {
        status: status.as_u16(),
        body: body.to_string(),
    }
}

/// Map a [`reqwest::Error`] raised while sending the request.
pub(crate) fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    if err.is_builder() {
        BackendError::InvalidRequest(err.to_string())
    } else {
        BackendError::Network(err.to_string())
    }
}
