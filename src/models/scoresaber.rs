//! ScoreSaber API response models and card rendering.

use serde::Deserialize;
use std::fmt;

use crate::format::{self, NONE_PLACEHOLDER};
use crate::models::{Card, CardBuilder, CardField, RecentPlay};

/// Card colour for ScoreSaber replies.
pub const SCORESABER_COLOR: u32 = 0xEB459F;

/// Response of `/players?search=`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSearch {
    #[serde(default)]
    pub players: Vec<PlayerRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRef {
    pub id: String,
}

/// Response of `/player/{id}/full`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub profile_picture: String,
    pub country: String,
    pub pp: f64,
    pub rank: u32,
    pub country_rank: u32,
    pub score_stats: ScoreStats,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreStats {
    pub total_score: u64,
    pub total_ranked_score: u64,
    pub total_play_count: u64,
    pub ranked_play_count: u64,
}

/// Response of `/player/{id}/scores`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScores {
    #[serde(default)]
    pub player_scores: Vec<PlayerScore>,
}

/// A score together with the leaderboard (map) it belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerScore {
    pub score: Score,
    pub leaderboard: Leaderboard,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub base_score: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub song_name: String,
    pub level_author_name: String,
    pub difficulty: LeaderboardDifficulty,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardDifficulty {
    pub difficulty: i64,
}

/// Beat Saber difficulty, decoded from ScoreSaber's numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Expert,
    ExpertPlus,
    Unknown,
}

impl From<i64> for Difficulty {
    fn from(code: i64) -> Self {
        match code {
            1 => Difficulty::Easy,
            3 => Difficulty::Normal,
            5 => Difficulty::Hard,
            7 => Difficulty::Expert,
            9 => Difficulty::ExpertPlus,
            _ => Difficulty::Unknown,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
            Difficulty::ExpertPlus => "Expert+",
            Difficulty::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Everything the ScoreSaber pipeline gathered for one user.
#[derive(Debug, Clone)]
pub struct ScoreSaberProfile {
    pub player: Player,
    pub recent: RecentPlay<PlayerScore>,
}

impl ScoreSaberProfile {
    /// Fields describing the recent play, with `None` placeholders when
    /// there is no recent play.
    pub fn recent_fields(&self) -> Vec<CardField> {
        let values = match self.recent.as_ref() {
            RecentPlay::Present(play) => [
                play.leaderboard.song_name.clone(),
                play.leaderboard.level_author_name.clone(),
                Difficulty::from(play.leaderboard.difficulty.difficulty).to_string(),
                format::with_comma(play.score.base_score),
            ],
            RecentPlay::Absent => std::array::from_fn(|_| NONE_PLACEHOLDER.to_string()),
        };

        const LABELS: [(&str, bool); 4] = [
            ("Last Played Map", false),
            ("Creator of the Map", true),
            ("Difficulty", true),
            ("Score", true),
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

    /// Render the reply card. The recent-play block is appended only when
    /// the user has a recent play.
    pub fn to_card(&self) -> Card {
        let player = &self.player;
        let stats = &player.score_stats;

        let mut card = CardBuilder::new(format!("ScoreSaber profile of {}", player.name))
            .color(SCORESABER_COLOR)
            .thumbnail(player.profile_picture.clone())
            .field("International rank", format::rank(Some(player.rank)), true)
            .field(
                format!("National rank in {}", player.country),
                format::rank(Some(player.country_rank)),
                true,
            )
            .field("Total score", format::with_comma(stats.total_score), true)
            .field(
                "Total score in Ranked",
                format::with_comma(stats.total_ranked_score),
                true,
            )
            .field("Number of times played", stats.total_play_count.to_string(), true)
            .field(
                "Number of times played in Ranked",
                stats.ranked_play_count.to_string(),
                true,
            )
            .field("Points of Performance (PP)", format::number(player.pp), true);

        if self.recent.is_present() {
            for field in self.recent_fields() {
                card = card.field(field.name, field.value, field.inline);
            }
        }

        card.build()
    }
}
