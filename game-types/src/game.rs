use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::PlayerId;

/// Live game for one player. Never sent to clients since it carries the secret word.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub player_id: PlayerId,
    pub secret_word: String,
    pub attempts_used: i32,
    pub hint_used: bool,
    pub created_at: String, // ISO 8601 string
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LetterResult {
    pub letter: String,
    pub status: LetterStatus,
    pub position: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LetterStatus {
    Exact,   // correct letter in correct position
    Present, // letter somewhere in the word
    Absent,  // letter not in word
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum StartOutcome {
    Started {
        word_length: i32,
        max_attempts: i32,
    },
    /// The existing session was kept and resumes where it left off
    AlreadyActive {
        attempts_used: i32,
        max_attempts: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HintOutcome {
    pub letter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum GuessOutcome {
    Win {
        word: String,
        attempts_used: i32,
    },
    Continue {
        feedback: Vec<LetterResult>,
        attempts_used: i32,
        max_attempts: i32,
    },
    LossExhausted {
        feedback: Vec<LetterResult>,
        revealed_word: String,
        attempts_used: i32,
    },
}

impl GuessOutcome {
    /// Whether the guess ended the session
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GuessOutcome::Continue { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EndOutcome {
    pub revealed_word: String,
}
