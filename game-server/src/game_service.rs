use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};
use tracing::info;

use crate::error::ServiceError;
use crate::player_locks::PlayerLocks;
use game_core::{GameRules, GuessResolution, StartPolicy, WordBank, hint_letter};
use game_persistence::{SessionRepository, UserRepository};
use game_types::{
    EndOutcome, GameError, GuessOutcome, HintOutcome, Leaderboard, PlayerStats, StartOutcome,
};

/// Session state machine for the word game.
///
/// Every operation holds the player's lock and runs in one database
/// transaction. An early return drops the transaction, which rolls it back, so
/// a failed step never leaves a score updated without its session removed (or
/// the other way round).
pub struct GameService {
    db: DatabaseConnection,
    word_bank: WordBank,
    rules: GameRules,
    locks: PlayerLocks,
}

impl GameService {
    /// The word bank decides the word length; the rules supply the rest
    pub fn new(db: DatabaseConnection, word_bank: WordBank, mut rules: GameRules) -> Self {
        rules.word_length = word_bank.word_length();
        Self {
            db,
            word_bank,
            rules,
            locks: PlayerLocks::new(),
        }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn player_locks(&self) -> &PlayerLocks {
        &self.locks
    }

    pub fn database(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Make sure the player has a ledger row. Returns true on first contact.
    pub async fn register_player(
        &self,
        player_id: &str,
        display_name: &str,
    ) -> Result<bool, ServiceError> {
        let created = UserRepository::new(&self.db)
            .ensure_user(player_id, display_name)
            .await?;
        if created {
            info!("Registered player {} ({})", player_id, display_name);
        }
        Ok(created)
    }

    pub async fn start_game(
        &self,
        player_id: &str,
        display_name: &str,
    ) -> Result<StartOutcome, ServiceError> {
        let _guard = self.locks.acquire(player_id).await;
        let txn = self.db.begin().await?;

        UserRepository::new(&txn)
            .ensure_user(player_id, display_name)
            .await?;

        let sessions = SessionRepository::new(&txn);
        if let Some(existing) = sessions.find_by_player(player_id).await? {
            match self.rules.start_policy {
                StartPolicy::Reject => {
                    txn.commit().await?;
                    info!(
                        "Player {} already has a game running ({} attempts used)",
                        player_id, existing.attempts_used
                    );
                    return Ok(StartOutcome::AlreadyActive {
                        attempts_used: existing.attempts_used,
                        max_attempts: self.rules.max_attempts,
                    });
                }
                StartPolicy::Replace => {
                    sessions.delete(existing.id).await?;
                    info!("Discarded running game {} for player {}", existing.id, player_id);
                }
            }
        }

        let secret_word = self.word_bank.random_word();
        let session = sessions
            .create(player_id, &secret_word)
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    ServiceError::Game(GameError::SessionAlreadyActive)
                }
                _ => ServiceError::Storage(err),
            })?;
        txn.commit().await?;

        info!("Started game {} for player {}", session.id, player_id);
        Ok(StartOutcome::Started {
            word_length: self.rules.word_length as i32,
            max_attempts: self.rules.max_attempts,
        })
    }

    pub async fn hint(&self, player_id: &str) -> Result<HintOutcome, ServiceError> {
        let _guard = self.locks.acquire(player_id).await;
        let txn = self.db.begin().await?;
        let sessions = SessionRepository::new(&txn);

        let session = sessions
            .find_by_player(player_id)
            .await?
            .ok_or(GameError::NoActiveSession)?;
        if session.hint_used {
            return Err(GameError::HintAlreadyUsed.into());
        }

        let letter = hint_letter(&session.secret_word, &mut rand::thread_rng()).ok_or_else(|| {
            DbErr::Custom(format!("Session {} has an empty secret word", session.id))
        })?;

        if !sessions.consume_hint(session.id).await? {
            return Err(GameError::HintAlreadyUsed.into());
        }
        txn.commit().await?;

        info!("Player {} used their hint for game {}", player_id, session.id);
        Ok(HintOutcome {
            letter: letter.to_string(),
        })
    }

    pub async fn guess(&self, player_id: &str, text: &str) -> Result<GuessOutcome, ServiceError> {
        let _guard = self.locks.acquire(player_id).await;
        let txn = self.db.begin().await?;
        let sessions = SessionRepository::new(&txn);

        let session = sessions
            .find_by_player(player_id)
            .await?
            .ok_or(GameError::NoActiveSession)?;
        let guess = self.rules.normalize_guess(text)?;

        // Count the attempt before judging it
        let attempts_used = if sessions
            .increment_attempts(session.id, self.rules.max_attempts)
            .await?
        {
            session.attempts_used + 1
        } else {
            session.attempts_used
        };

        let outcome = match self
            .rules
            .resolve_guess(&guess, &session.secret_word, attempts_used)
        {
            GuessResolution::Win => {
                UserRepository::new(&txn).record_win(player_id).await?;
                sessions.delete(session.id).await?;
                info!(
                    "Player {} solved {} in {} attempts",
                    player_id, session.secret_word, attempts_used
                );
                GuessOutcome::Win {
                    word: session.secret_word,
                    attempts_used,
                }
            }
            GuessResolution::Exhausted { feedback } => {
                UserRepository::new(&txn).record_loss(player_id).await?;
                sessions.delete(session.id).await?;
                info!(
                    "Player {} ran out of attempts on {}",
                    player_id, session.secret_word
                );
                GuessOutcome::LossExhausted {
                    feedback,
                    revealed_word: session.secret_word,
                    attempts_used,
                }
            }
            GuessResolution::Continue { feedback } => GuessOutcome::Continue {
                feedback,
                attempts_used,
                max_attempts: self.rules.max_attempts,
            },
        };

        txn.commit().await?;
        Ok(outcome)
    }

    pub async fn end_game(&self, player_id: &str) -> Result<EndOutcome, ServiceError> {
        let _guard = self.locks.acquire(player_id).await;
        let txn = self.db.begin().await?;
        let sessions = SessionRepository::new(&txn);

        let session = sessions
            .find_by_player(player_id)
            .await?
            .ok_or(GameError::NoActiveSession)?;

        UserRepository::new(&txn).record_loss(player_id).await?;
        sessions.delete(session.id).await?;
        txn.commit().await?;

        info!("Player {} ended game {}", player_id, session.id);
        Ok(EndOutcome {
            revealed_word: session.secret_word,
        })
    }

    pub async fn leaderboard(&self, limit: u64) -> Result<Leaderboard, ServiceError> {
        let entries = UserRepository::new(&self.db).top_n(limit).await?;
        Ok(Leaderboard::from_entries(entries))
    }

    pub async fn player_stats(&self, player_id: &str) -> Result<Option<PlayerStats>, ServiceError> {
        let users = UserRepository::new(&self.db);

        let Some(user) = users.find_by_id(player_id).await? else {
            return Ok(None);
        };
        let rank = users.get_user_rank(player_id).await?;

        Ok(Some(PlayerStats { user, rank }))
    }
}
