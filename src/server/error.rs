// src/server/error.rs

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::errors::TasksortError;

/// Reason sent back when the request's dependencies form a cycle.
pub const CYCLE_REASON: &str = "Circular Dependency Found";

/// Handler error: input problems become `400`, anything else `500`.
#[derive(Debug)]
pub struct ApiError(pub TasksortError);

impl<E> From<E> for ApiError
where
    E: Into<TasksortError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;

        if !err.is_client_error() {
            error!(error = %err, "request failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
        }

        warn!(error = %err, "rejecting request");
        let body = match err {
            TasksortError::CircularDependency(_) => CYCLE_REASON.to_string(),
            other => other.to_string(),
        };
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
