//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-class errors to
//! Sentry before responding to the client. Route handlers return
//! `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::graph::GraphError;

/// Application-level error type for the signature service.
#[derive(Debug, Error)]
pub enum AppError {
    /// Graph or token-exchange operation failed.
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Graph(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            // A user the directory does not know is the caller's problem,
            // everything else from Graph is an upstream failure.
            Self::Graph(GraphError::Api { status: 404, .. }) => StatusCode::NOT_FOUND,
            Self::Graph(_) => StatusCode::BAD_GATEWAY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Graph(GraphError::Api { status: 404, .. }) => "User not found".to_string(),
            Self::Graph(_) => "Directory service error".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
            Self::BadRequest(_) => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("missing email".to_string());
        assert_eq!(err.to_string(), "Bad request: missing email");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Graph(GraphError::Api {
                status: 404,
                message: String::new()
            })),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Graph(GraphError::Api {
                status: 503,
                message: String::new()
            })),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_graph_errors_hide_details_from_clients() {
        let err = AppError::Graph(GraphError::TokenExchange {
            status: 401,
            message: "AADSTS7000215 invalid client secret".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
