use super::entity::{NewPost, Post};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: &NewPost) -> Result<Post, DomainError>;
    /// Look up a post only if it is filed under `board_id`.
    async fn find_in_board(&self, board_id: i64, post_id: i64)
        -> Result<Option<Post>, DomainError>;
    /// Posts of one board, newest first.
    async fn find_by_board(&self, board_id: i64) -> Result<Vec<Post>, DomainError>;
    async fn update(&self, post: &Post) -> Result<Post, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
