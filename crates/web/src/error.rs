use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use folio_core::error::CoreError;

use crate::views;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds a variant for server-side
/// plumbing failures. Implements [`IntoResponse`] so handlers can bubble
/// errors with `?` and still produce a rendered error page.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// A domain-level error from `folio-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type WebResult<T> = Result<T, WebError>;

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            WebError::Core(CoreError::ProjectNotFound { slug }) => {
                tracing::debug!(slug = %slug, "Unknown project slug");
                (StatusCode::NOT_FOUND, "There is no page at this address.")
            }

            // The message is logged, never rendered: request data and
            // internal details stay out of the response body.
            WebError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong on our side.",
                )
            }
        };

        (status, Html(views::error_page(status, detail))).into_response()
    }
}
