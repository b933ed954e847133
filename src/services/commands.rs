// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chat command dispatch.

use crate::config::Config;
use crate::credentials::CredentialProvider;
use crate::models::Reply;
use crate::services::{OsuLookup, ScoreSaberLookup};
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;

/// Commands exposed to the chat host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Osu,
    ScoreSaber,
}

impl Command {
    pub const ALL: [Command; 2] = [Command::Osu, Command::ScoreSaber];

    pub fn name(self) -> &'static str {
        match self {
            Command::Osu => "osu",
            Command::ScoreSaber => "scoresaber",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Command::Osu => "osu <username>",
            Command::ScoreSaber => "scoresaber <username>",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Osu => "Fetch osu! player stats for the given username.",
            Command::ScoreSaber => "Fetch ScoreSaber profile data for a user by username.",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// Help entry for `GET /commands`.
#[derive(Debug, Serialize)]
pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

impl From<Command> for CommandInfo {
    fn from(command: Command) -> Self {
        Self {
            name: command.name(),
            usage: command.usage(),
            description: command.description(),
        }
    }
}

/// Runs commands against their lookup pipelines.
#[derive(Clone)]
pub struct CommandService {
    osu: OsuLookup,
    scoresaber: ScoreSaberLookup,
}

impl CommandService {
    pub fn new(config: &Config, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            osu: OsuLookup::new(&config.osu_api_base, &config.osu_token_url, credentials),
            scoresaber: ScoreSaberLookup::new(&config.scoresaber_api_base),
        }
    }

    /// Execute one command. The whole argument text is the username.
    pub async fn execute(&self, command: Command, args: &str) -> Reply {
        let username = args.trim();
        if username.is_empty() {
            return Reply::text(format!("Usage: {}", command.usage()));
        }

        tracing::info!(command = command.name(), username, "Running command");

        match command {
            Command::Osu => self.osu.run(username).await,
            Command::ScoreSaber => self.scoresaber.run(username).await,
        }
    }
}
