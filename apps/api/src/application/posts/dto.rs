use crate::application::shared::validation::not_blank;
use crate::domain::{
    like::entity::LikeSummary,
    post::entity::Post,
    shared::authorization::is_author,
    user::entity::User,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, TS)]
#[ts(export)]
pub struct PostPayload {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, TS)]
#[ts(export)]
pub struct PostPatch {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub title: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub content: Option<String>,
}

impl From<PostPayload> for PostPatch {
    fn from(payload: PostPayload) -> Self {
        Self {
            title: Some(payload.title),
            content: Some(payload.content),
        }
    }
}

/// A post as seen by one caller. `is_author`, `is_like` and `like_count`
/// are computed for every request.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct PostResponse {
    pub pk: i64,
    pub board: i64,
    pub author: User,
    pub is_author: bool,
    pub is_like: bool,
    pub title: String,
    pub content: String,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostResponse {
    pub fn new(post: Post, caller: &User, likes: LikeSummary) -> Self {
        Self {
            is_author: is_author(caller, &post),
            is_like: likes.liked_by_viewer,
            like_count: likes.count,
            pk: post.id,
            board: post.board_id,
            author: post.author,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
