pub mod boards;
pub mod comments;
pub mod likes;
pub mod posts;
pub mod shared;

use crate::domain::{
    board::repository::BoardRepository, comment::repository::CommentRepository,
    like::repository::LikeRepository, post::repository::PostRepository,
    user::repository::UserRepository,
};
use std::sync::Arc;

/// Persistence ports the use cases are assembled from.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub boards: Arc<dyn BoardRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub likes: Arc<dyn LikeRepository>,
}
