use super::dto::{BoardPatch, BoardPayload, BoardResponse};
use crate::application::shared::lookup;
use crate::domain::{
    board::{entity::NewBoard, repository::BoardRepository},
    shared::{authorization::ensure_author, errors::DomainError},
    user::{entity::User, repository::UserRepository},
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Board controller logic: open reads for any caller, author-only writes.
pub struct BoardUseCase {
    boards: Arc<dyn BoardRepository>,
    users: Arc<dyn UserRepository>,
}

impl BoardUseCase {
    pub fn new(boards: Arc<dyn BoardRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { boards, users }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<BoardResponse>, DomainError> {
        let boards = self.boards.find_all().await?;
        Ok(boards.into_iter().map(BoardResponse::from).collect())
    }

    #[instrument(skip(self, caller), fields(caller = %caller.username))]
    pub async fn create(
        &self,
        caller: &User,
        payload: BoardPayload,
    ) -> Result<BoardResponse, DomainError> {
        self.users.upsert(caller).await?;
        let board = self
            .boards
            .create(&NewBoard {
                author: caller.clone(),
                title: payload.title,
            })
            .await?;
        info!(board_id = board.id, "Board created: {}", board);
        Ok(board.into())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, board_id: i64) -> Result<BoardResponse, DomainError> {
        Ok(lookup::board(self.boards.as_ref(), board_id).await?.into())
    }

    #[instrument(skip(self, caller), fields(caller = %caller.username))]
    pub async fn update(
        &self,
        caller: &User,
        board_id: i64,
        patch: BoardPatch,
    ) -> Result<BoardResponse, DomainError> {
        let mut board = lookup::board(self.boards.as_ref(), board_id).await?;
        ensure_author(caller, &board)?;
        self.users.upsert(caller).await?;
        board.author = caller.clone();

        if let Some(title) = patch.title {
            board.title = title;
        }
        let board = self.boards.update(&board).await?;
        Ok(board.into())
    }

    #[instrument(skip(self, caller), fields(caller = %caller.username))]
    pub async fn delete(&self, caller: &User, board_id: i64) -> Result<(), DomainError> {
        let board = lookup::board(self.boards.as_ref(), board_id).await?;
        ensure_author(caller, &board)?;
        self.users.upsert(caller).await?;

        self.boards.delete(board.id).await?;
        info!(board_id, "Board deleted: {}", board);
        Ok(())
    }
}
