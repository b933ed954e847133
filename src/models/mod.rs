// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for upstream API responses and replies.

pub mod card;
pub mod osu;
pub mod scoresaber;

pub use card::{Card, CardBuilder, CardField, Reply};
pub use osu::OsuProfile;
pub use scoresaber::{Difficulty, ScoreSaberProfile};

/// Most recent play of a user, which may legitimately not exist.
#[derive(Debug, Clone, PartialEq)]
pub enum RecentPlay<T> {
    Present(T),
    Absent,
}

impl<T> RecentPlay<T> {
    pub fn as_ref(&self) -> RecentPlay<&T> {
        match self {
            RecentPlay::Present(play) => RecentPlay::Present(play),
            RecentPlay::Absent => RecentPlay::Absent,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, RecentPlay::Present(_))
    }
}

impl<T> From<Option<T>> for RecentPlay<T> {
    fn from(play: Option<T>) -> Self {
        match play {
            Some(play) => RecentPlay::Present(play),
            None => RecentPlay::Absent,
        }
    }
}
