use super::entity::{LikeSummary, LikeTarget};
use crate::domain::{shared::errors::DomainError, user::entity::User};
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Users who like `target`, in the order they liked it.
    async fn likers(&self, target: LikeTarget) -> Result<Vec<User>, DomainError>;
    async fn summary(&self, target: LikeTarget, viewer: Uuid)
        -> Result<LikeSummary, DomainError>;
    /// Returns `false` when the like already existed.
    async fn add(&self, target: LikeTarget, user_id: Uuid) -> Result<bool, DomainError>;
    /// Returns `false` when there was nothing to remove.
    async fn remove(&self, target: LikeTarget, user_id: Uuid) -> Result<bool, DomainError>;
}
