// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared request handling for upstream REST APIs.

use crate::error::{LookupError, Stage};
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client for one command invocation.
///
/// The client owns the connection pool; dropping it at the end of the
/// invocation releases every connection it opened.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_default()
}

/// Send a request and decode a successful JSON response.
///
/// Transport errors and non-success statuses fail `stage`. A success
/// response whose body does not match `T` is a [`LookupError::SchemaMismatch`].
pub async fn get_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    stage: Stage,
) -> Result<T, LookupError> {
    let response = request
        .send()
        .await
        .map_err(|e| LookupError::LookupFailure {
            stage,
            reason: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%stage, status = status.as_u16(), body = %body, "Upstream request failed");
        return Err(LookupError::LookupFailure {
            stage,
            reason: format!("HTTP {}", status),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| LookupError::LookupFailure {
            stage,
            reason: format!("Failed to read body: {}", e),
        })?;

    serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(%stage, error = %e, "Unexpected response shape");
        LookupError::SchemaMismatch(format!("{} response: {}", stage, e))
    })
}

/// Like [`get_json`], but an HTTP-level failure degrades to `None`.
///
/// Shape errors are still reported.
pub async fn get_optional_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    stage: Stage,
) -> Result<Option<T>, LookupError> {
    match get_json(request, stage).await {
        Ok(value) => Ok(Some(value)),
        Err(LookupError::LookupFailure { reason, .. }) => {
            tracing::warn!(%stage, reason = %reason, "Optional lookup failed, continuing without it");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
