// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - lookup pipelines and command dispatch.

pub mod commands;
pub mod osu;
pub mod scoresaber;
pub mod token;
pub mod upstream;

pub use commands::{Command, CommandInfo, CommandService};
pub use osu::OsuLookup;
pub use scoresaber::ScoreSaberLookup;
pub use token::TokenExchanger;
