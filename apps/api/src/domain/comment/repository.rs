use super::entity::{Comment, NewComment};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, comment: &NewComment) -> Result<Comment, DomainError>;
    /// Look up a comment only if it is attached to `post_id`.
    async fn find_in_post(
        &self,
        post_id: i64,
        comment_id: i64,
    ) -> Result<Option<Comment>, DomainError>;
    /// Comments of one post, newest first.
    async fn find_by_post(&self, post_id: i64) -> Result<Vec<Comment>, DomainError>;
    async fn update(&self, comment: &Comment) -> Result<Comment, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
