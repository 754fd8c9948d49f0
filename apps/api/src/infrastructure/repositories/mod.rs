pub mod sqlx_board_repository;
pub mod sqlx_comment_repository;
pub mod sqlx_like_repository;
pub mod sqlx_post_repository;
pub mod sqlx_user_repository;

use crate::application::Repositories;
use crate::domain::shared::errors::DomainError;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::error;

/// Postgres-backed implementations of every repository port.
pub fn sqlx_repositories(pool: PgPool) -> Repositories {
    Repositories {
        users: Arc::new(sqlx_user_repository::SqlxUserRepository::new(pool.clone())),
        boards: Arc::new(sqlx_board_repository::SqlxBoardRepository::new(pool.clone())),
        posts: Arc::new(sqlx_post_repository::SqlxPostRepository::new(pool.clone())),
        comments: Arc::new(sqlx_comment_repository::SqlxCommentRepository::new(pool.clone())),
        likes: Arc::new(sqlx_like_repository::SqlxLikeRepository::new(pool)),
    }
}

pub(crate) fn infra_error(err: sqlx::Error) -> DomainError {
    error!(database_error = %err);
    DomainError::InfrastructureError(err.to_string())
}
