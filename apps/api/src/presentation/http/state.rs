use crate::{
    application::{
        Repositories, boards::use_case::BoardUseCase, comments::use_case::CommentUseCase,
        likes::use_case::LikeUseCase, posts::use_case::PostUseCase,
    },
    config::Config,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub boards: Arc<BoardUseCase>,
    pub posts: Arc<PostUseCase>,
    pub comments: Arc<CommentUseCase>,
    pub likes: Arc<LikeUseCase>,
}

impl AppState {
    pub fn new(db: PgPool, config: Config, repos: Repositories) -> Self {
        Self {
            db,
            config,
            boards: Arc::new(BoardUseCase::new(repos.boards.clone(), repos.users.clone())),
            posts: Arc::new(PostUseCase::new(
                repos.boards,
                repos.posts.clone(),
                repos.likes.clone(),
                repos.users.clone(),
            )),
            comments: Arc::new(CommentUseCase::new(
                repos.posts.clone(),
                repos.comments.clone(),
                repos.likes.clone(),
                repos.users.clone(),
            )),
            likes: Arc::new(LikeUseCase::new(
                repos.posts,
                repos.comments,
                repos.likes,
                repos.users,
            )),
        }
    }
}
