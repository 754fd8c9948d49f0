use super::infra_error;
use crate::domain::{
    shared::errors::DomainError,
    user::{entity::User, repository::UserRepository},
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    #[instrument(skip(self))]
    async fn upsert(&self, user: &User) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO users (id, username) VALUES ($1, $2)
             ON CONFLICT (id) DO UPDATE
             SET username = EXCLUDED.username, updated_at = NOW()
             WHERE users.username <> EXCLUDED.username",
        )
        .bind(user.pk)
        .bind(&user.username)
        .execute(&self.pool)
        .await
        .map_err(infra_error)?;
        Ok(())
    }
}
