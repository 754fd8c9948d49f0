use super::entity::User;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user, or refresh the stored username if it changed.
    async fn upsert(&self, user: &User) -> Result<(), DomainError>;
}
