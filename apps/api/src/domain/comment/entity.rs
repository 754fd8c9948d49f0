use crate::domain::{shared::authorization::Authored, user::entity::User};
use chrono::{DateTime, Utc};
use std::fmt;

/// A reply attached to a post.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author: User,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub post_id: i64,
    pub author: User,
    pub text: String,
}

impl Authored for Comment {
    const KIND: &'static str = "comment";

    fn author(&self) -> &User {
        &self.author
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'s comment: {}", self.author.username, self.text)
    }
}
