use crate::application::shared::lookup;
use crate::domain::{
    comment::repository::CommentRepository,
    like::{
        entity::{LikeState, LikeTarget, already_liked, not_liked},
        repository::LikeRepository,
    },
    post::repository::PostRepository,
    shared::errors::DomainError,
    user::{entity::User, repository::UserRepository},
};
use std::sync::Arc;
use tracing::{info, instrument};

/// The like sub-resource shared by posts and comments.
///
/// Targets are resolved through their path first, so a missing post or
/// comment is reported before any like state is consulted.
pub struct LikeUseCase {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    likes: Arc<dyn LikeRepository>,
    users: Arc<dyn UserRepository>,
}

impl LikeUseCase {
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

    pub async fn resolve_post(
        &self,
        board_id: i64,
        post_id: i64,
    ) -> Result<LikeTarget, DomainError> {
        let post = lookup::post(self.posts.as_ref(), board_id, post_id).await?;
        Ok(LikeTarget::Post(post.id))
    }

    pub async fn resolve_comment(
        &self,
        board_id: i64,
        post_id: i64,
        comment_id: i64,
    ) -> Result<LikeTarget, DomainError> {
        let post = lookup::post(self.posts.as_ref(), board_id, post_id).await?;
        let comment = lookup::comment(self.comments.as_ref(), post.id, comment_id).await?;
        Ok(LikeTarget::Comment(comment.id))
    }

    /// Everyone who likes `target`. An empty liker set is a validation
    /// failure rather than an empty list.
    #[instrument(skip(self))]
    pub async fn likers(&self, target: LikeTarget) -> Result<Vec<User>, DomainError> {
        let likers = self.likes.likers(target).await?;
        if likers.is_empty() {
            return Err(DomainError::ValidationError(
                "No one has liked this yet".to_string(),
            ));
        }
        Ok(likers)
    }

    #[instrument(skip(self, caller), fields(caller = %caller.username))]
    pub async fn like(&self, caller: &User, target: LikeTarget) -> Result<(), DomainError> {
        self.state_of(caller, target).await?.like()?;
        self.users.upsert(caller).await?;

        // A concurrent like from the same caller can land between the check and the insert.
        if !self.likes.add(target, caller.pk).await? {
            return Err(already_liked());
        }
        info!(?target, "Like added");
        Ok(())
    }

    #[instrument(skip(self, caller), fields(caller = %caller.username))]
    pub async fn unlike(&self, caller: &User, target: LikeTarget) -> Result<(), DomainError> {
        self.state_of(caller, target).await?.unlike()?;
        self.users.upsert(caller).await?;

        if !self.likes.remove(target, caller.pk).await? {
            return Err(not_liked());
        }
        info!(?target, "Like removed");
        Ok(())
    }

    async fn state_of(&self, caller: &User, target: LikeTarget) -> Result<LikeState, DomainError> {
        let summary = self.likes.summary(target, caller.pk).await?;
        Ok(LikeState::from_membership(summary.liked_by_viewer))
    }
}
