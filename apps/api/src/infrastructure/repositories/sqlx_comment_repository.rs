use super::infra_error;
use crate::domain::{
    comment::{
        entity::{Comment, NewComment},
        repository::CommentRepository,
    },
    shared::errors::DomainError,
    user::entity::User,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::instrument;
use uuid::Uuid;

const SELECT_COMMENT: &str = "SELECT c.id, c.post_id, c.author_id, u.username AS author_username, \
                                     c.text, c.created_at, c.updated_at \
                              FROM comments c \
                              JOIN users u ON u.id = c.author_id";

#[derive(FromRow)]
struct CommentRow {
    id: i64,
    post_id: i64,
    author_id: Uuid,
    author_username: String,
    text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(r: CommentRow) -> Self {
        Comment {
            id: r.id,
            post_id: r.post_id,
            author: User {
                pk: r.author_id,
                username: r.author_username,
            },
            text: r.text,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

pub struct SqlxCommentRepository {
    pub pool: PgPool,
}

impl SqlxCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepository {
    #[instrument(skip(self))]
    async fn create(&self, comment: &NewComment) -> Result<Comment, DomainError> {
        let (id, created_at, updated_at) =
            sqlx::query_as::<_, (i64, DateTime<Utc>, DateTime<Utc>)>(
                "INSERT INTO comments (post_id, author_id, text) VALUES ($1, $2, $3)
                 RETURNING id, created_at, updated_at",
            )
            .bind(comment.post_id)
            .bind(comment.author.pk)
            .bind(&comment.text)
            .fetch_one(&self.pool)
            .await
            .map_err(infra_error)?;

        Ok(Comment {
            id,
            post_id: comment.post_id,
            author: comment.author.clone(),
            text: comment.text.clone(),
            created_at,
            updated_at,
        })
    }

    #[instrument(skip(self))]
    async fn find_in_post(
        &self,
        post_id: i64,
        comment_id: i64,
    ) -> Result<Option<Comment>, DomainError> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "{SELECT_COMMENT} WHERE c.id = $1 AND c.post_id = $2"
        ))
        .bind(comment_id)
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(infra_error)?;
        Ok(row.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: i64) -> Result<Vec<Comment>, DomainError> {
        let rows = sqlx::query_as::<_, CommentRow>(&format!(
            "{SELECT_COMMENT} WHERE c.post_id = $1 ORDER BY c.id DESC"
        ))
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(infra_error)?;
        Ok(rows.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn update(&self, comment: &Comment) -> Result<Comment, DomainError> {
        let updated_at = sqlx::query_scalar::<_, DateTime<Utc>>(
            "UPDATE comments SET text = $2, updated_at = NOW() WHERE id = $1 RETURNING updated_at",
        )
        .bind(comment.id)
        .bind(&comment.text)
        .fetch_optional(&self.pool)
        .await
        .map_err(infra_error)?
        .ok_or_else(|| DomainError::NotFound("Comment not found".to_string()))?;

        Ok(Comment {
            updated_at,
            ..comment.clone()
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(infra_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("Comment not found".to_string()));
        }
        Ok(())
    }
}
