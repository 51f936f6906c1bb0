use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use tracing::warn;

use crate::entities::{prelude::*, users};
use game_types::{LeaderboardEntry, User};

fn timestamp() -> DateTimeWithTimeZone {
    chrono::Utc::now().into()
}

/// Score ledger over the `users` table. Borrows either the pooled connection
/// or an open transaction, so writes can join the caller's unit of work.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn model_to_user(model: users::Model) -> User {
        User {
            id: model.id,
            display_name: model.display_name,
            score: model.score,
            streak: model.streak,
            created_at: model.created_at.to_rfc3339(),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, DbErr> {
        let user_model = Users::find_by_id(id.to_string()).one(self.db).await?;
        Ok(user_model.map(Self::model_to_user))
    }

    /// Insert the player if absent. Returns whether a row was created; an
    /// existing player keeps their original display name and stats.
    pub async fn ensure_user(&self, id: &str, display_name: &str) -> Result<bool, DbErr> {
        let now = timestamp();

        let user_model = users::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            display_name: ActiveValue::Set(display_name.to_string()),
            score: ActiveValue::Set(0),
            streak: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        let inserted = Users::insert(user_model)
            .on_conflict(
                OnConflict::column(users::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(inserted > 0)
    }

    /// score += 1, streak += 1
    pub async fn record_win(&self, id: &str) -> Result<bool, DbErr> {
        let result = Users::update_many()
            .col_expr(users::Column::Score, Expr::col(users::Column::Score).add(1))
            .col_expr(users::Column::Streak, Expr::col(users::Column::Streak).add(1))
            .col_expr(users::Column::UpdatedAt, Expr::value(timestamp()))
            .filter(users::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            warn!("Tried to record a win for unknown player {}", id);
        }
        Ok(result.rows_affected > 0)
    }

    /// streak = 0, score untouched
    pub async fn record_loss(&self, id: &str) -> Result<bool, DbErr> {
        let result = Users::update_many()
            .col_expr(users::Column::Streak, Expr::value(0))
            .col_expr(users::Column::UpdatedAt, Expr::value(timestamp()))
            .filter(users::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            warn!("Tried to record a loss for unknown player {}", id);
        }
        Ok(result.rows_affected > 0)
    }

    /// Highest scores first. Ties keep registration order so ranks are stable.
    pub async fn top_n(&self, limit: u64) -> Result<Vec<LeaderboardEntry>, DbErr> {
        let users = Users::find()
            .order_by_desc(users::Column::Score)
            .order_by_asc(users::Column::CreatedAt)
            .order_by_asc(users::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        let leaderboard = users
            .into_iter()
            .enumerate()
            .map(|(index, model)| LeaderboardEntry {
                rank: (index + 1) as u32,
                display_name: model.display_name,
                score: model.score,
            })
            .collect();

        Ok(leaderboard)
    }

    pub async fn get_user_rank(&self, id: &str) -> Result<Option<u32>, DbErr> {
        let user = Users::find_by_id(id.to_string()).one(self.db).await?;

        if let Some(user_model) = user {
            let users_above = Users::find()
                .filter(users::Column::Score.gt(user_model.score))
                .count(self.db)
                .await?;

            Ok(Some(users_above as u32 + 1))
        } else {
            Ok(None)
        }
    }
}
