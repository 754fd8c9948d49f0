use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Public identity of a forum user.
///
/// Accounts are owned by the external identity provider that signs bearer
/// tokens; this service only mirrors `pk` and `username` so that boards,
/// posts and comments can reference their author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct User {
    pub pk: Uuid,
    pub username: String,
}
