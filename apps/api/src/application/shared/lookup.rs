//! Path resolution for nested resources. A child addressed through the wrong
//! parent is reported as missing.

use crate::domain::{
    board::{entity::Board, repository::BoardRepository},
    comment::{entity::Comment, repository::CommentRepository},
    post::{entity::Post, repository::PostRepository},
    shared::errors::DomainError,
};

pub async fn board(boards: &dyn BoardRepository, board_id: i64) -> Result<Board, DomainError> {
    boards
        .find_by_id(board_id)
        .await?
        .ok_or_else(|| DomainError::NotFound("Board not found".to_string()))
}

pub async fn post(
    posts: &dyn PostRepository,
    board_id: i64,
    post_id: i64,
) -> Result<Post, DomainError> {
    posts
        .find_in_board(board_id, post_id)
        .await?
        .ok_or_else(|| DomainError::NotFound("Post not found".to_string()))
}

pub async fn comment(
    comments: &dyn CommentRepository,
    post_id: i64,
    comment_id: i64,
) -> Result<Comment, DomainError> {
    comments
        .find_in_post(post_id, comment_id)
        .await?
        .ok_or_else(|| DomainError::NotFound("Comment not found".to_string()))
}
