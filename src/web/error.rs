//! Mapping of service failures onto HTTP responses.

use super::ViewError;
use crate::task::{domain::TaskDomainError, services::TaskLifecycleError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failure of a single HTTP request.
#[derive(Debug, Error)]
pub enum WebError {
    /// The task service rejected or failed the operation.
    #[error(transparent)]
    Lifecycle(#[from] TaskLifecycleError),
    /// A page could not be rendered.
    #[error(transparent)]
    View(#[from] ViewError),
}

impl From<TaskDomainError> for WebError {
    fn from(err: TaskDomainError) -> Self {
        Self::Lifecycle(err.into())
    }
}

impl WebError {
    /// Returns the status code reported to the client.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Lifecycle(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Lifecycle(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            Self::Lifecycle(_) | Self::View(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            return (status, "internal server error").into_response();
        }
        tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        (status, self.to_string()).into_response()
    }
}
