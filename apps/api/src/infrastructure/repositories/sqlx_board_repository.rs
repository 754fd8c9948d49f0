use super::infra_error;
use crate::domain::{
    board::{
        entity::{Board, NewBoard},
        repository::BoardRepository,
    },
    shared::errors::DomainError,
    user::entity::User,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{debug, instrument};
use uuid::Uuid;

const SELECT_BOARD: &str = "SELECT b.id, b.author_id, u.username AS author_username, \
                                   b.title, b.created_at, b.updated_at \
                            FROM boards b \
                            JOIN users u ON u.id = b.author_id";

#[derive(FromRow)]
struct BoardRow {
    id: i64,
    author_id: Uuid,
    author_username: String,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BoardRow> for Board {
    fn from(r: BoardRow) -> Self {
        Board {
            id: r.id,
            author: User {
                pk: r.author_id,
                username: r.author_username,
            },
            title: r.title,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

pub struct SqlxBoardRepository {
    pub pool: PgPool,
}

impl SqlxBoardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoardRepository for SqlxBoardRepository {
    #[instrument(skip(self))]
    async fn create(&self, board: &NewBoard) -> Result<Board, DomainError> {
        let (id, created_at, updated_at) =
            sqlx::query_as::<_, (i64, DateTime<Utc>, DateTime<Utc>)>(
                "INSERT INTO boards (author_id, title) VALUES ($1, $2)
                 RETURNING id, created_at, updated_at",
            )
            .bind(board.author.pk)
            .bind(&board.title)
            .fetch_one(&self.pool)
            .await
            .map_err(infra_error)?;

        debug!(board_id = id, "Inserted board row");
        Ok(Board {
            id,
            author: board.author.clone(),
            title: board.title.clone(),
            created_at,
            updated_at,
        })
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Board>, DomainError> {
        let row = sqlx::query_as::<_, BoardRow>(&format!("{SELECT_BOARD} WHERE b.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(infra_error)?;
        Ok(row.map(Board::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Board>, DomainError> {
        let rows = sqlx::query_as::<_, BoardRow>(&format!("{SELECT_BOARD} ORDER BY b.id DESC"))
            .fetch_all(&self.pool)
            .await
            .map_err(infra_error)?;
        Ok(rows.into_iter().map(Board::from).collect())
    }

    #[instrument(skip(self))]
    async fn update(&self, board: &Board) -> Result<Board, DomainError> {
        let updated_at = sqlx::query_scalar::<_, DateTime<Utc>>(
            "UPDATE boards SET title = $2, updated_at = NOW() WHERE id = $1 RETURNING updated_at",
        )
        .bind(board.id)
        .bind(&board.title)
        .fetch_optional(&self.pool)
        .await
        .map_err(infra_error)?
        .ok_or_else(|| DomainError::NotFound("Board not found".to_string()))?;

        Ok(Board {
            updated_at,
            ..board.clone()
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM boards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(infra_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("Board not found".to_string()));
        }
        Ok(())
    }
}
