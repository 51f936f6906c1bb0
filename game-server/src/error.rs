use game_types::GameError;
use sea_orm::DbErr;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Storage error: {0}")]
    Storage(#[from] DbErr),
}

impl ServiceError {
    /// The error as reported to players. Storage details stay in the logs.
    pub fn kind(&self) -> GameError {
        match self {
            ServiceError::Game(err) => err.clone(),
            ServiceError::Storage(_) => GameError::StorageUnavailable {
                message: "Storage is temporarily unavailable, try again later".to_string(),
            },
        }
    }
}
