//! osu! API v2 response models and card rendering.

use serde::Deserialize;

use crate::format::{self, NA_PLACEHOLDER, NONE_PLACEHOLDER};
use crate::models::{Card, CardBuilder, CardField, RecentPlay};

/// Card colour for osu! replies.
pub const OSU_COLOR: u32 = 0xE966A1;

/// Minimal user shape returned by the username lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct OsuUserId {
    pub id: u32,
}

/// User with statistics for the osu! standard mode.
#[derive(Debug, Clone, Deserialize)]
pub struct OsuUser {
    pub id: u32,
    pub username: String,
    pub avatar_url: String,
    pub country: OsuCountry,
    pub statistics: OsuStatistics,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OsuCountry {
    pub code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OsuStatistics {
    pub pp: f64,
    /// Null for inactive players
    pub global_rank: Option<u32>,
    pub country_rank: Option<u32>,
    pub hit_accuracy: f64,
    pub play_count: u64,
    pub level: OsuLevel,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OsuLevel {
    pub current: u32,
}

/// One entry of `/users/{id}/scores/recent`.
#[derive(Debug, Clone, Deserialize)]
pub struct OsuScore {
    /// Letter grade (`XH`, `S`, `A`, ..., `F`)
    pub rank: String,
    #[serde(alias = "total_score")]
    pub score: u64,
    pub max_combo: u32,
    /// Absent or null for unranked maps and failed plays
    #[serde(default)]
    pub pp: Option<f64>,
    pub beatmap: OsuBeatmapRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OsuBeatmapRef {
    pub id: u32,
}

/// Beatmap with its parent beatmapset.
#[derive(Debug, Clone, Deserialize)]
pub struct OsuBeatmap {
    pub id: u32,
    pub beatmapset: OsuBeatmapset,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OsuBeatmapset {
    pub id: u32,
    pub artist: String,
    pub title: String,
    pub creator: String,
    pub play_count: u64,
}

/// Recent score together with the map it was set on.
#[derive(Debug, Clone)]
pub struct OsuRecent {
    pub score: OsuScore,
    pub beatmap: OsuBeatmap,
}

/// Everything the osu! pipeline gathered for one user.
#[derive(Debug, Clone)]
pub struct OsuProfile {
    pub user: OsuUser,
    pub recent: RecentPlay<OsuRecent>,
}

impl OsuProfile {
    /// Fields describing the recent play, with `None` placeholders when
    /// there is no recent play.
    pub fn recent_fields(&self) -> Vec<CardField> {
        let values = match self.recent.as_ref() {
            RecentPlay::Present(recent) => {
                let set = &recent.beatmap.beatmapset;
                let score = &recent.score;
                [
                    format!(
                        "[{} - {}](https://osu.ppy.sh/b/{})",
                        set.artist, set.title, recent.beatmap.id
                    ),
                    set.creator.clone(),
                    set.play_count.to_string(),
                    score.rank.clone(),
                    score.score.to_string(),
                    score.max_combo.to_string(),
                    score
                        .pp
                        .map(format::number)
                        .unwrap_or_else(|| NA_PLACEHOLDER.to_string()),
                ]
            }
            RecentPlay::Absent => std::array::from_fn(|_| NONE_PLACEHOLDER.to_string()),
        };

        const LABELS: [(&str, bool); 7] = [
            ("Last Played Map", false),
            ("Created by", false),
            ("Play Count on Map", true),
            ("Rank on Map", true),
            ("Score on Map", true),
            ("Max Combo on Map", true),
            ("Performance Points (PP) Earned on Map", true),
        ];

        LABELS
            .iter()
            .zip(values)
            .map(|(&(name, inline), value)| CardField {
                name: name.to_string(),
                value,
                inline,
            })
            .collect()
    }

    /// Render the reply card. The recent-play block is left out when the
    /// user has no recent play.
    pub fn to_card(&self) -> Card {
        let user = &self.user;
        let stats = &user.statistics;

        let mut card = CardBuilder::new(format!(
            "osu! - Player's statistics for {}",
            user.username
        ))
        .color(OSU_COLOR)
        .thumbnail(user.avatar_url.clone());

        if self.recent.is_present() {
            for field in self.recent_fields() {
                card = card.field(field.name, field.value, field.inline);
            }
        }

        card.field("Performance Points (PP)", format::number(stats.pp), true)
            .field("Global Rank", format::rank(stats.global_rank), true)
            .field(
                format!("Country Rank in {}", user.country.code),
                format::rank(stats.country_rank),
                true,
            )
            .field("Accuracy", format!("{:.2}%", stats.hit_accuracy), true)
            .field("Total Plays", stats.play_count.to_string(), true)
            .field("Level", stats.level.current.to_string(), true)
            .build()
    }
}
