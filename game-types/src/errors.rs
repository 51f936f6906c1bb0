use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum GameError {
    #[error("No active game session")]
    NoActiveSession,
    #[error("A game session is already active")]
    SessionAlreadyActive,
    #[error("Hint already used for this game")]
    HintAlreadyUsed,
    #[error("Player has not played yet")]
    PlayerNotFound,
    #[error("Invalid guess '{guess}': expected {expected_length} letters")]
    InvalidGuessFormat { guess: String, expected_length: u32 },
    #[error("Storage unavailable: {message}")]
    StorageUnavailable { message: String },
}

impl GameError {
    /// Errors the player can fix by themselves, as opposed to server trouble
    pub fn is_user_correctable(&self) -> bool {
        !matches!(self, GameError::StorageUnavailable { .. })
    }
}
