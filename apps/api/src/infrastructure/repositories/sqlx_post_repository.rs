use super::infra_error;
use crate::domain::{
    post::{
        entity::{NewPost, Post},
        repository::PostRepository,
    },
    shared::errors::DomainError,
    user::entity::User,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{debug, instrument};
use uuid::Uuid;

const SELECT_POST: &str = "SELECT p.id, p.board_id, p.author_id, u.username AS author_username, \
                                  p.title, p.content, p.created_at, p.updated_at \
                           FROM posts p \
                           JOIN users u ON u.id = p.author_id";

#[derive(FromRow)]
struct PostRow {
    id: i64,
    board_id: i64,
    author_id: Uuid,
    author_username: String,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PostRow> for Post {
    fn from(r: PostRow) -> Self {
        Post {
            id: r.id,
            board_id: r.board_id,
            author: User {
                pk: r.author_id,
                username: r.author_username,
            },
            title: r.title,
            content: r.content,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

pub struct SqlxPostRepository {
    pub pool: PgPool,
}

impl SqlxPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for SqlxPostRepository {
    #[instrument(skip(self))]
    async fn create(&self, post: &NewPost) -> Result<Post, DomainError> {
        let (id, created_at, updated_at) =
            sqlx::query_as::<_, (i64, DateTime<Utc>, DateTime<Utc>)>(
                "INSERT INTO posts (board_id, author_id, title, content) VALUES ($1, $2, $3, $4)
                 RETURNING id, created_at, updated_at",
            )
            .bind(post.board_id)
            .bind(post.author.pk)
            .bind(&post.title)
            .bind(&post.content)
            .fetch_one(&self.pool)
            .await
            .map_err(infra_error)?;

        debug!(post_id = id, "Inserted post row");
        Ok(Post {
            id,
            board_id: post.board_id,
            author: post.author.clone(),
            title: post.title.clone(),
            content: post.content.clone(),
            created_at,
            updated_at,
        })
    }

    #[instrument(skip(self))]
    async fn find_in_board(
        &self,
        board_id: i64,
        post_id: i64,
    ) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "{SELECT_POST} WHERE p.id = $1 AND p.board_id = $2"
        ))
        .bind(post_id)
        .bind(board_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(infra_error)?;
        Ok(row.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_by_board(&self, board_id: i64) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "{SELECT_POST} WHERE p.board_id = $1 ORDER BY p.id DESC"
        ))
        .bind(board_id)
        .fetch_all(&self.pool)
        .await
        .map_err(infra_error)?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn update(&self, post: &Post) -> Result<Post, DomainError> {
        let updated_at = sqlx::query_scalar::<_, DateTime<Utc>>(
            "UPDATE posts SET title = $2, content = $3, updated_at = NOW()
             WHERE id = $1 RETURNING updated_at",
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.content)
        .fetch_optional(&self.pool)
        .await
        .map_err(infra_error)?
        .ok_or_else(|| DomainError::NotFound("Post not found".to_string()))?;

        Ok(Post {
            updated_at,
            ..post.clone()
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(infra_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("Post not found".to_string()));
        }
        Ok(())
    }
}
