use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::PlayerId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: PlayerId,
    pub display_name: String,
    pub score: i32,
    pub streak: i32,
    pub created_at: String, // ISO 8601 string for simplicity
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub display_name: String,
    pub score: i32,
}

/// Top players by total wins. An empty ranking is its own variant so callers
/// can't render it as a blank list by accident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", content = "entries", rename_all = "snake_case")]
#[ts(export)]
pub enum Leaderboard {
    NoScores,
    Ranked(Vec<LeaderboardEntry>),
}

impl Leaderboard {
    pub fn from_entries(entries: Vec<LeaderboardEntry>) -> Self {
        if entries.is_empty() {
            Leaderboard::NoScores
        } else {
            Leaderboard::Ranked(entries)
        }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        match self {
            Leaderboard::NoScores => &[],
            Leaderboard::Ranked(entries) => entries,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlayerStats {
    pub user: User,
    pub rank: Option<u32>,
}
