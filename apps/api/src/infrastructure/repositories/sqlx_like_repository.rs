use super::infra_error;
use crate::domain::{
    like::{
        entity::{LikeSummary, LikeTarget},
        repository::LikeRepository,
    },
    shared::errors::DomainError,
    user::entity::User,
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

/// Join table, target column and target id for a like target.
fn relation(target: LikeTarget) -> (&'static str, &'static str, i64) {
    match target {
        LikeTarget::Post(id) => ("post_likes", "post_id", id),
        LikeTarget::Comment(id) => ("comment_likes", "comment_id", id),
    }
}

pub struct SqlxLikeRepository {
    pub pool: PgPool,
}

impl SqlxLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for SqlxLikeRepository {
    #[instrument(skip(self))]
    async fn likers(&self, target: LikeTarget) -> Result<Vec<User>, DomainError> {
        let (table, column, id) = relation(target);
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT u.id AS pk, u.username FROM {table} l \
             JOIN users u ON u.id = l.user_id \
             WHERE l.{column} = $1 \
             ORDER BY l.created_at, u.id"
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(infra_error)?;
        Ok(users)
    }

    #[instrument(skip(self))]
    async fn summary(
        &self,
        target: LikeTarget,
        viewer: Uuid,
    ) -> Result<LikeSummary, DomainError> {
        let (table, column, id) = relation(target);
        let (count, liked_by_viewer) = sqlx::query_as::<_, (i64, bool)>(&format!(
            "SELECT COUNT(*), COALESCE(BOOL_OR(user_id = $2), FALSE) \
             FROM {table} WHERE {column} = $1"
        ))
        .bind(id)
        .bind(viewer)
        .fetch_one(&self.pool)
        .await
        .map_err(infra_error)?;
        Ok(LikeSummary {
            count,
            liked_by_viewer,
        })
    }

    #[instrument(skip(self))]
    async fn add(&self, target: LikeTarget, user_id: Uuid) -> Result<bool, DomainError> {
        let (table, column, id) = relation(target);
        let result = sqlx::query(&format!(
            "INSERT INTO {table} ({column}, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING"
        ))
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(infra_error)?;
        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self))]
    async fn remove(&self, target: LikeTarget, user_id: Uuid) -> Result<bool, DomainError> {
        let (table, column, id) = relation(target);
        let result = sqlx::query(&format!(
            "DELETE FROM {table} WHERE {column} = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(infra_error)?;
        Ok(result.rows_affected() == 1)
    }
}
