// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failure talking to an upstream site.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("upstream body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Failure reading or writing the saved commentary.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("saved commentary is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum CommentaryError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("no authenticated session")]
    Unauthorized,
    #[error("live scores: {0}")]
    LiveScores(#[source] FetchError),
    #[error("fetch commentary: {0}")]
    FetchCommentary(#[source] CommentaryError),
    #[error("saved commentary: {0}")]
    SavedCommentary(#[source] PersistError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client. Upstream and disk details stay in the logs.
    pub fn client_message(&self) -> &'static str {
        match self {
            AppError::InvalidCredentials => "Invalid credentials",
            AppError::Unauthorized => "Unauthorized",
            AppError::LiveScores(_) => "Failed to fetch live scores.",
            AppError::FetchCommentary(_) => "Failed to fetch commentary.",
            AppError::SavedCommentary(_) => "Failed to retrieve saved commentary.",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        (status, Json(json!({ "error": self.client_message() }))).into_response()
    }
}
