use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::entities::{prelude::*, sessions};
use game_types::Session;

/// Session store over the `sessions` table. The unique index on `player_id`
/// keeps at most one live session per player.
pub struct SessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SessionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn model_to_session(model: sessions::Model) -> Session {
        Session {
            id: model.id,
            player_id: model.player_id,
            secret_word: model.secret_word,
            attempts_used: model.attempts,
            hint_used: model.hint_used,
            created_at: model.created_at.to_rfc3339(),
        }
    }

    pub async fn find_by_player(&self, player_id: &str) -> Result<Option<Session>, DbErr> {
        let session_model = Sessions::find()
            .filter(sessions::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await?;

        Ok(session_model.map(Self::model_to_session))
    }

    /// Fails with a unique constraint violation if the player already has one
    pub async fn create(&self, player_id: &str, secret_word: &str) -> Result<Session, DbErr> {
        let session_model = sessions::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            player_id: ActiveValue::Set(player_id.to_string()),
            secret_word: ActiveValue::Set(secret_word.to_string()),
            attempts: ActiveValue::Set(0),
            hint_used: ActiveValue::Set(false),
            created_at: ActiveValue::Set(chrono::Utc::now().into()),
        };

        let created = session_model.insert(self.db).await?;
        Ok(Self::model_to_session(created))
    }

    /// Bump the attempt counter unless it already sits at `max_attempts`.
    /// Returns whether the counter moved.
    pub async fn increment_attempts(
        &self,
        session_id: Uuid,
        max_attempts: i32,
    ) -> Result<bool, DbErr> {
        let result = Sessions::update_many()
            .col_expr(
                sessions::Column::Attempts,
                Expr::col(sessions::Column::Attempts).add(1),
            )
            .filter(sessions::Column::Id.eq(session_id))
            .filter(sessions::Column::Attempts.lt(max_attempts))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Flip `hint_used` to true. Only the first call on a session succeeds.
    pub async fn consume_hint(&self, session_id: Uuid) -> Result<bool, DbErr> {
        let result = Sessions::update_many()
            .col_expr(sessions::Column::HintUsed, Expr::value(true))
            .filter(sessions::Column::Id.eq(session_id))
            .filter(sessions::Column::HintUsed.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn delete(&self, session_id: Uuid) -> Result<bool, DbErr> {
        let result = Sessions::delete_by_id(session_id).exec(self.db).await?;
        Ok(result.rows_affected == 1)
    }
}
