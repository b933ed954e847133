// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types: pipeline failures and HTTP-facing errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

/// Step of a lookup pipeline, used to name the stage that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Token,
    Identity,
    Statistics,
    RecentPlay,
    MapMetadata,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Token => "token",
            Stage::Identity => "identity",
            Stage::Statistics => "statistics",
            Stage::RecentPlay => "recent play",
            Stage::MapMetadata => "map metadata",
        };
        f.write_str(name)
    }
}

/// Terminal failure of a lookup pipeline.
///
/// Every variant is turned into exactly one chat message by the
/// integration that produced it. An empty recent-play list is not an
/// error and has no variant here.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("{service} API credentials are not configured")]
    ConfigurationMissing { service: &'static str },

    #[error("Token exchange failed: {0}")]
    AuthFailure(String),

    #[error("{stage} lookup failed: {reason}")]
    LookupFailure { stage: Stage, reason: String },

    #[error("No users found matching {username:?}")]
    UserNotFound { username: String },

    #[error("Unexpected response shape: {0}")]
    SchemaMismatch(String),
}

impl LookupError {
    /// Stage that failed, for HTTP-level lookup failures.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            LookupError::LookupFailure { stage, .. } => Some(*stage),
            LookupError::AuthFailure(_) => Some(Stage::Token),
            LookupError::UserNotFound { .. } => Some(Stage::Identity),
            _ => None,
        }
    }
}

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized", None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
