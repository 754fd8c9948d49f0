use super::entity::{Board, NewBoard};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardRepository: Send + Sync {
    async fn create(&self, board: &NewBoard) -> Result<Board, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Board>, DomainError>;
    /// All boards, newest first.
    async fn find_all(&self) -> Result<Vec<Board>, DomainError>;
    /// Persist `title` and bump `updated_at`.
    async fn update(&self, board: &Board) -> Result<Board, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
