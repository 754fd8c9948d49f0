use super::dto::{PostPatch, PostPayload, PostResponse};
use crate::application::shared::lookup;
use crate::domain::{
    board::repository::BoardRepository,
    like::{
        entity::{LikeSummary, LikeTarget},
        repository::LikeRepository,
    },
    post::{
        entity::{NewPost, Post},
        repository::PostRepository,
    },
    shared::{authorization::ensure_author, errors::DomainError},
    user::{entity::User, repository::UserRepository},
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Post controller logic scoped under a board.
pub struct PostUseCase {
    boards: Arc<dyn BoardRepository>,
    posts: Arc<dyn PostRepository>,
    likes: Arc<dyn LikeRepository>,
    users: Arc<dyn UserRepository>,
}

impl PostUseCase {
    pub fn new(
        boards: Arc<dyn BoardRepository>,
        posts: Arc<dyn PostRepository>,
        likes: Arc<dyn LikeRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            boards,
            posts,
            likes,
            users,
        }
    }

    #[instrument(skip(self, caller), fields(caller = %caller.username))]
    pub async fn list(
        &self,
        caller: &User,
        board_id: i64,
    ) -> Result<Vec<PostResponse>, DomainError> {
        let board = lookup::board(self.boards.as_ref(), board_id).await?;
        let posts = self.posts.find_by_board(board.id).await?;

        let mut responses = Vec::with_capacity(posts.len());
        for post in posts {
            responses.push(self.present(caller, post).await?);
        }
        Ok(responses)
    }

    #[instrument(skip(self, caller), fields(caller = %caller.username))]
    pub async fn create(
        &self,
        caller: &User,
        board_id: i64,
        payload: PostPayload,
    ) -> Result<PostResponse, DomainError> {
        let board = lookup::board(self.boards.as_ref(), board_id).await?;
        self.users.upsert(caller).await?;

        let post = self
            .posts
            .create(&NewPost {
                board_id: board.id,
                author: caller.clone(),
                title: payload.title,
                content: payload.content,
            })
            .await?;
        info!(board_id, post_id = post.id, "Post created: {}", post);
        Ok(PostResponse::new(post, caller, LikeSummary::default()))
    }

    #[instrument(skip(self, caller), fields(caller = %caller.username))]
    pub async fn get(
        &self,
        caller: &User,
        board_id: i64,
        post_id: i64,
    ) -> Result<PostResponse, DomainError> {
        let post = lookup::post(self.posts.as_ref(), board_id, post_id).await?;
        self.present(caller, post).await
    }

    #[instrument(skip(self, caller), fields(caller = %caller.username))]
    pub async fn update(
        &self,
        caller: &User,
        board_id: i64,
        post_id: i64,
        patch: PostPatch,
    ) -> Result<PostResponse, DomainError> {
        let mut post = lookup::post(self.posts.as_ref(), board_id, post_id).await?;
        ensure_author(caller, &post)?;
        self.users.upsert(caller).await?;
        post.author = caller.clone();

        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        let post = self.posts.update(&post).await?;
        self.present(caller, post).await
    }

    #[instrument(skip(self, caller), fields(caller = %caller.username))]
    pub async fn delete(
        &self,
        caller: &User,
        board_id: i64,
        post_id: i64,
    ) -> Result<(), DomainError> {
        let post = lookup::post(self.posts.as_ref(), board_id, post_id).await?;
        ensure_author(caller, &post)?;
        self.users.upsert(caller).await?;

        self.posts.delete(post.id).await?;
        info!(board_id, post_id, "Post deleted: {}", post);
        Ok(())
    }

    async fn present(&self, caller: &User, post: Post) -> Result<PostResponse, DomainError> {
        let likes = self
            .likes
            .summary(LikeTarget::Post(post.id), caller.pk)
            .await?;
        Ok(PostResponse::new(post, caller, likes))
    }
}
