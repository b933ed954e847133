// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! ScoreSaber player lookup (no authentication).

use crate::error::{LookupError, Stage};
use crate::models::scoresaber::{Player, PlayerScores, PlayerSearch, ScoreSaberProfile};
use crate::models::{RecentPlay, Reply};
use crate::services::upstream;

/// ScoreSaber lookup pipeline.
#[derive(Debug, Clone)]
pub struct ScoreSaberLookup {
    api_base: String,
}

impl ScoreSaberLookup {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Run the command and turn the outcome into a single reply.
    pub async fn run(&self, username: &str) -> Reply {
        match self.lookup(username).await {
            Ok(profile) => {
                tracing::info!(
                    player_id = %profile.player.id,
                    recent = profile.recent.is_present(),
                    "ScoreSaber lookup complete"
                );
                Reply::card(profile.to_card())
            }
            Err(e) => {
                tracing::warn!(error = %e, username, "ScoreSaber lookup failed");
                Reply::text(error_message(&e))
            }
        }
    }

    /// Resolve `username` into a full profile. The first search result is
    /// taken as the player.
    pub async fn lookup(&self, username: &str) -> Result<ScoreSaberProfile, LookupError> {
        let http = upstream::client();

        // Spaces are sent as %20, not `+`.
        let url = format!(
            "{}/players?search={}",
            self.api_base,
            urlencoding::encode(username)
        );
        let search: PlayerSearch = upstream::get_json(http.get(&url), Stage::Identity).await?;
        let player_id = search
            .players
            .into_iter()
            .next()
            .map(|p| p.id)
            .ok_or_else(|| LookupError::UserNotFound {
                username: username.to_string(),
            })?;
        tracing::debug!(player_id = %player_id, "Resolved ScoreSaber player");

        let url = format!("{}/player/{}/full", self.api_base, player_id);
        let player: Player = upstream::get_json(http.get(&url), Stage::Statistics).await?;

        let url = format!("{}/player/{}/scores", self.api_base, player_id);
        let recent = upstream::get_optional_json::<PlayerScores>(
            http.get(&url).query(&[("sort", "recent"), ("limit", "1")]),
            Stage::RecentPlay,
        )
        .await?
        .and_then(|scores| scores.player_scores.into_iter().next());

        Ok(ScoreSaberProfile {
            player,
            recent: RecentPlay::from(recent),
        })
    }
}

/// User-facing message for a failed ScoreSaber lookup.
pub fn error_message(err: &LookupError) -> String {
    match err {
        LookupError::UserNotFound { .. } => "No users found with this nickname.".to_string(),
        LookupError::LookupFailure {
            stage: Stage::Identity,
            ..
        } => "An error occurred while searching for the user. Check the nickname.".to_string(),
        LookupError::LookupFailure {
            stage: Stage::Statistics,
            ..
        } => "An error occurred while retrieving profile data.".to_string(),
        _ => "Unable to retrieve certain information for this user.".to_string(),
    }
}
