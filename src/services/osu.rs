// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! osu! player lookup.
//!
//! Pipeline, each step keyed by the previous one:
//! - credentials from the provider
//! - client-credentials token exchange
//! - username → user id
//! - user id → statistics
//! - user id → most recent score (optional)
//! - beatmap id of that score → beatmap metadata

use crate::credentials::{CredentialProvider, Credentials};
use crate::error::{LookupError, Stage};
use crate::models::osu::{OsuBeatmap, OsuProfile, OsuRecent, OsuScore, OsuUser, OsuUserId};
use crate::models::{RecentPlay, Reply};
use crate::services::token::TokenExchanger;
use crate::services::upstream;
use std::sync::Arc;

/// Service name used for credential lookup.
pub const SERVICE: &str = "osu";

/// osu! API v2 lookup pipeline.
#[derive(Clone)]
pub struct OsuLookup {
    api_base: String,
    tokens: TokenExchanger,
    credentials: Arc<dyn CredentialProvider>,
}

impl OsuLookup {
    pub fn new(
        api_base: impl Into<String>,
        token_url: impl Into<String>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            api_base: api_base.into(),
            tokens: TokenExchanger::new(token_url),
            credentials,
        }
    }

    /// Run the command and turn the outcome into a single reply.
    pub async fn run(&self, username: &str) -> Reply {
        match self.lookup(username).await {
            Ok(profile) => {
                tracing::info!(
                    user_id = profile.user.id,
                    recent = profile.recent.is_present(),
                    "osu! lookup complete"
                );
                Reply::card(profile.to_card())
            }
            Err(e) => {
                tracing::warn!(error = %e, username, "osu! lookup failed");
                Reply::text(error_message(&e, username))
            }
        }
    }

    /// Resolve `username` into a full profile.
    pub async fn lookup(&self, username: &str) -> Result<OsuProfile, LookupError> {
        let credentials = Credentials::from_tokens(&self.credentials.api_tokens(SERVICE))
            .ok_or(LookupError::ConfigurationMissing { service: SERVICE })?;

        let http = upstream::client();
        let token = self.tokens.exchange(&http, &credentials).await?;

        let url = format!("{}/users/{}", self.api_base, urlencoding::encode(username));
        let identity: OsuUserId =
            upstream::get_json(http.get(&url).bearer_auth(&token), Stage::Identity).await?;
        tracing::debug!(user_id = identity.id, "Resolved osu! user");

        let url = format!("{}/users/{}/osu", self.api_base, identity.id);
        let user: OsuUser =
            upstream::get_json(http.get(&url).bearer_auth(&token), Stage::Statistics).await?;

        let url = format!("{}/users/{}/scores/recent", self.api_base, identity.id);
        let scores: Vec<OsuScore> = upstream::get_optional_json(
            http.get(&url).bearer_auth(&token).query(&[("limit", "1")]),
            Stage::RecentPlay,
        )
        .await?
        .unwrap_or_default();

        let recent = match scores.into_iter().next() {
            Some(score) => {
                let url = format!("{}/beatmaps/{}", self.api_base, score.beatmap.id);
                let beatmap: OsuBeatmap =
                    upstream::get_json(http.get(&url).bearer_auth(&token), Stage::MapMetadata)
                        .await?;
                RecentPlay::Present(OsuRecent { score, beatmap })
            }
            None => RecentPlay::Absent,
        };

        Ok(OsuProfile { user, recent })
    }
}

/// User-facing message for a failed osu! lookup.
pub fn error_message(err: &LookupError, username: &str) -> String {
    match err {
        LookupError::ConfigurationMissing { .. } => "The osu! API credentials are not set. \
            Please configure `OSU_CLIENT_ID` and `OSU_CLIENT_SECRET`."
            .to_string(),
        LookupError::AuthFailure(_) => {
            "Unable to retrieve osu! API access token. Please check your credentials.".to_string()
        }
        LookupError::LookupFailure {
            stage: Stage::Statistics,
            ..
        } => format!(
            "Failed to retrieve data for user {}. Make sure the username is correct.",
            username
        ),
        LookupError::LookupFailure {
            stage: Stage::MapMetadata,
            ..
        } => "Failed to retrieve beatmap data for the last played map.".to_string(),
        LookupError::LookupFailure { .. } | LookupError::UserNotFound { .. } => format!(
            "Failed to retrieve user ID for username {}. Make sure the username is correct.",
            username
        ),
        LookupError::SchemaMismatch(_) => {
            "Unable to retrieve certain information for this user.".to_string()
        }
    }
}
