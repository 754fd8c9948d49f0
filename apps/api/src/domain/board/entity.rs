use crate::domain::{shared::authorization::Authored, user::entity::User};
use chrono::{DateTime, Utc};
use std::fmt;

/// Top-level forum container. Owns the posts filed under it.
///
/// # Invariants
/// - `author` is bound to the caller at creation and never changes
/// - deleting a board removes its posts, their comments and all likes on them
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub id: i64,
    pub author: User,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewBoard {
    pub author: User,
    pub title: String,
}

impl Authored for Board {
    const KIND: &'static str = "board";

    fn author(&self) -> &User {
        &self.author
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
