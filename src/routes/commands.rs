// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Command routes called by the chat host.

use crate::error::{AppError, Result};
use crate::models::Reply;
use crate::services::{Command, CommandInfo};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Command routes (require the command token).
/// The auth middleware is applied in routes/mod.rs.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/commands", get(list_commands))
        .route("/commands/{name}", post(run_command))
}

/// Command invocation body.
#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    /// Free-text argument, everything after the command name
    #[serde(default)]
    pub args: String,
}

/// List available commands.
async fn list_commands() -> Json<Vec<CommandInfo>> {
    Json(Command::ALL.into_iter().map(CommandInfo::from).collect())
}

/// Run one command. Lookup failures are replies, not HTTP errors.
async fn run_command(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    request: std::result::Result<Json<CommandRequest>, JsonRejection>,
) -> Result<Json<Reply>> {
    let Json(request) = request.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let command = name
        .parse::<Command>()
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(state.commands.execute(command, &request.args).await))
}
