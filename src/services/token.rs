// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OAuth2 client-credentials token exchange.

use crate::credentials::Credentials;
use crate::error::LookupError;
use serde::{Deserialize, Serialize};

/// Scope requested for read-only public API access.
const PUBLIC_SCOPE: &str = "public";

/// Exchanges client credentials for a short-lived bearer token.
///
/// A token is obtained per invocation and never cached.
#[derive(Debug, Clone)]
pub struct TokenExchanger {
    token_url: String,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'a str,
    scope: &'a str,
}

/// Token response. Only the access token is used.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

impl TokenExchanger {
    pub fn new(token_url: impl Into<String>) -> Self {
        Self {
            token_url: token_url.into(),
        }
    }

    /// Perform a single exchange. Any failure is an [`LookupError::AuthFailure`].
    pub async fn exchange(
        &self,
        http: &reqwest::Client,
        credentials: &Credentials,
    ) -> Result<String, LookupError> {
        let body = TokenRequest {
            client_id: &credentials.client_id,
            client_secret: &credentials.client_secret,
            grant_type: "client_credentials",
            scope: PUBLIC_SCOPE,
        };

        let response = http
            .post(&self.token_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| LookupError::AuthFailure(format!("Token request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Token exchange failed");
            return Err(LookupError::AuthFailure(format!(
                "Token exchange failed with status {}",
                status
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| LookupError::AuthFailure(format!("Failed to parse token response: {}", e)))?;

        token
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| LookupError::AuthFailure("Token response has no access_token".to_string()))
    }
}
