// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-service API credentials supplied by the host.

use std::collections::HashMap;
use std::env;

/// Source of named credential fields, keyed by service name.
///
/// Missing fields are reported by omission, not by an error: callers
/// decide whether the service is usable via [`Credentials::from_tokens`].
pub trait CredentialProvider: Send + Sync {
    fn api_tokens(&self, service: &str) -> HashMap<String, String>;
}

/// Reads `<SERVICE>_CLIENT_ID` / `<SERVICE>_CLIENT_SECRET` from the
/// environment on every call.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentials;

impl EnvCredentials {
    const FIELDS: [&'static str; 2] = ["client_id", "client_secret"];
}

impl CredentialProvider for EnvCredentials {
    fn api_tokens(&self, service: &str) -> HashMap<String, String> {
        Self::FIELDS
            .iter()
            .filter_map(|field| {
                let var = format!("{}_{}", service, field).to_uppercase();
                env::var(var).ok().map(|value| (field.to_string(), value))
            })
            .collect()
    }
}

/// Fixed in-memory credentials.
#[derive(Debug, Default, Clone)]
pub struct StaticCredentials {
    services: HashMap<String, HashMap<String, String>>,
}

impl StaticCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one field for a service.
    pub fn with(mut self, service: &str, field: &str, value: &str) -> Self {
        self.services
            .entry(service.to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());
        self
    }

    /// Convenience for the usual client id/secret pair.
    pub fn with_client(self, service: &str, client_id: &str, client_secret: &str) -> Self {
        self.with(service, "client_id", client_id)
            .with(service, "client_secret", client_secret)
    }
}

impl CredentialProvider for StaticCredentials {
    fn api_tokens(&self, service: &str) -> HashMap<String, String> {
        self.services.get(service).cloned().unwrap_or_default()
    }
}

/// OAuth client identity for one service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Build credentials from provider fields.
    ///
    /// Returns `None` if either field is missing or blank.
    pub fn from_tokens(tokens: &HashMap<String, String>) -> Option<Self> {
        let field = |name: &str| {
            tokens
                .get(name)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Some(Self {
            client_id: field("client_id")?,
            client_secret: field("client_secret")?,
        })
    }
}
