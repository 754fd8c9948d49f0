use crate::domain::{shared::authorization::Authored, user::entity::User};
use chrono::{DateTime, Utc};
use std::fmt;

/// A thread filed under a board.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i64,
    pub board_id: i64,
    pub author: User,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub board_id: i64,
    pub author: User,
    pub title: String,
    pub content: String,
}

impl Authored for Post {
    const KIND: &'static str = "post";

    fn author(&self) -> &User {
        &self.author
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
