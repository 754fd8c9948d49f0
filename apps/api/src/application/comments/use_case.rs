use super::dto::{CommentPatch, CommentPayload, CommentResponse};
use crate::application::shared::lookup;
use crate::domain::{
    comment::{
        entity::{Comment, NewComment},
        repository::CommentRepository,
    },
    like::{
        entity::{LikeSummary, LikeTarget},
        repository::LikeRepository,
    },
    post::repository::PostRepository,
    shared::{authorization::ensure_author, errors::DomainError},
    user::{entity::User, repository::UserRepository},
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Comment controller logic scoped under a post, which is itself scoped
/// under a board.
pub struct CommentUseCase {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    likes: Arc<dyn LikeRepository>,
    users: Arc<dyn UserRepository>,
}

impl CommentUseCase {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        likes: Arc<dyn LikeRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            posts,
            comments,
            likes,
            users,
        }
    }

    #[instrument(skip(self, caller), fields(caller = %caller.username))]
    pub async fn list(
        &self,
        caller: &User,
        board_id: i64,
        post_id: i64,
    ) -> Result<Vec<CommentResponse>, DomainError> {
        let post = lookup::post(self.posts.as_ref(), board_id, post_id).await?;
        let comments = self.comments.find_by_post(post.id).await?;

        let mut responses = Vec::with_capacity(comments.len());
        for comment in comments {
            responses.push(self.present(caller, comment).await?);
        }
        Ok(responses)
    }

    #[instrument(skip(self, caller), fields(caller = %caller.username))]
    pub async fn create(
        &self,
        caller: &User,
        board_id: i64,
        post_id: i64,
        payload: CommentPayload,
    ) -> Result<CommentResponse, DomainError> {
        let post = lookup::post(self.posts.as_ref(), board_id, post_id).await?;
        self.users.upsert(caller).await?;

        let comment = self
            .comments
            .create(&NewComment {
                post_id: post.id,
                author: caller.clone(),
                text: payload.text,
            })
            .await?;
        info!(post_id, comment_id = comment.id, "Comment created: {}", comment);
        Ok(CommentResponse::new(comment, caller, LikeSummary::default()))
    }

    #[instrument(skip(self, caller), fields(caller = %caller.username))]
    pub async fn get(
        &self,
        caller: &User,
        board_id: i64,
        post_id: i64,
        comment_id: i64,
    ) -> Result<CommentResponse, DomainError> {
        let comment = self.resolve(board_id, post_id, comment_id).await?;
        self.present(caller, comment).await
    }

    #[instrument(skip(self, caller), fields(caller = %caller.username))]
    pub async fn update(
        &self,
        caller: &User,
        board_id: i64,
        post_id: i64,
        comment_id: i64,
        patch: CommentPatch,
    ) -> Result<CommentResponse, DomainError> {
        let mut comment = self.resolve(board_id, post_id, comment_id).await?;
        ensure_author(caller, &comment)?;
        self.users.upsert(caller).await?;
        comment.author = caller.clone();

        if let Some(text) = patch.text {
            comment.text = text;
        }
        let comment = self.comments.update(&comment).await?;
        self.present(caller, comment).await
    }

    #[instrument(skip(self, caller), fields(caller = %caller.username))]
    pub async fn delete(
        &self,
        caller: &User,
        board_id: i64,
        post_id: i64,
        comment_id: i64,
    ) -> Result<(), DomainError> {
        let comment = self.resolve(board_id, post_id, comment_id).await?;
        ensure_author(caller, &comment)?;
        self.users.upsert(caller).await?;

        self.comments.delete(comment.id).await?;
        info!(post_id, comment_id, "Comment deleted: {}", comment);
        Ok(())
    }

    async fn resolve(
        &self,
        board_id: i64,
        post_id: i64,
        comment_id: i64,
    ) -> Result<Comment, DomainError> {
        let post = lookup::post(self.posts.as_ref(), board_id, post_id).await?;
        lookup::comment(self.comments.as_ref(), post.id, comment_id).await
    }

    async fn present(
        &self,
        caller: &User,
        comment: Comment,
    ) -> Result<CommentResponse, DomainError> {
        let likes = self
            .likes
            .summary(LikeTarget::Comment(comment.id), caller.pk)
            .await?;
        Ok(CommentResponse::new(comment, caller, likes))
    }
}
