use std::error::Error as StdError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rolodex_core::DomainError;
use thiserror::Error;
use tracing::error;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Handler failure. Every variant renders as a plain-text body; store
/// details never reach the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(&'static str),
    #[error("not found: {0}")]
    NotFound(&'static str),
    #[error("{operation} failed: {source}")]
    Internal {
        operation: &'static str,
        message: &'static str,
        #[source]
        source: BoxError,
    },
}

impl ApiError {
    pub fn internal(
        operation: &'static str,
        message: &'static str,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Internal { operation, message, source: source.into() }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest(message) | Self::NotFound(message) => *message,
            Self::Internal { message, .. } => *message,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(value: DomainError) -> Self {
        Self::BadRequest(value.user_message())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal { operation, ref source, .. } = self {
            error!(
                event_name = "api.store.error",
                operation,
                error = %source,
                "request failed against the store"
            );
        }

        (self.status(), self.message()).into_response()
    }
}

/// Adapter for `map_err` at store call sites.
pub fn store_error<E>(
    operation: &'static str,
    message: &'static str,
) -> impl FnOnce(E) -> ApiError
where
    E: Into<BoxError>,
{
    move |error| ApiError::internal(operation, message, error)
}
