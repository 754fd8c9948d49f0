use crate::domain::shared::errors::DomainError;

/// Something a user can like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LikeTarget {
    Post(i64),
    Comment(i64),
}

/// Like figures for one target as seen by one viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LikeSummary {
    pub count: i64,
    pub liked_by_viewer: bool,
}

/// Membership of one user in the liker set of one target.
///
/// Every (target, user) pair starts out `NotLiked`. Liking and unliking are the
/// only transitions, and each is rejected from the state it would not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeState {
    Liked,
    NotLiked,
}

impl LikeState {
    pub fn from_membership(is_member: bool) -> Self {
        if is_member { Self::Liked } else { Self::NotLiked }
    }

    pub fn like(self) -> Result<Self, DomainError> {
        match self {
            Self::NotLiked => Ok(Self::Liked),
            Self::Liked => Err(already_liked()),
        }
    }

    pub fn unlike(self) -> Result<Self, DomainError> {
        match self {
            Self::Liked => Ok(Self::NotLiked),
            Self::NotLiked => Err(not_liked()),
        }
    }
}

pub fn already_liked() -> DomainError {
    DomainError::ValidationError("You have already liked this".to_string())
}

pub fn not_liked() -> DomainError {
    DomainError::ValidationError("You have not liked this".to_string())
}
