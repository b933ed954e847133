// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! rhythm-stats: osu! and ScoreSaber player statistics for chat.
//!
//! The chat host calls a small webhook API with a command name and a
//! username. Each command runs a lookup pipeline against the game's public
//! REST API and answers with a single card or text message.

pub mod config;
pub mod credentials;
pub mod error;
pub mod format;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::CommandService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub commands: CommandService,
}
