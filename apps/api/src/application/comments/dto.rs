use crate::application::shared::validation::not_blank;
use crate::domain::{
    comment::entity::Comment, like::entity::LikeSummary, shared::authorization::is_author,
    user::entity::User,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, TS)]
#[ts(export)]
pub struct CommentPayload {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, TS)]
#[ts(export)]
pub struct CommentPatch {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub text: Option<String>,
}

impl From<CommentPayload> for CommentPatch {
    fn from(payload: CommentPayload) -> Self {
        Self {
            text: Some(payload.text),
        }
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct CommentResponse {
    pub pk: i64,
    pub post: i64,
    pub author: User,
    pub is_author: bool,
    pub is_like: bool,
    pub text: String,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CommentResponse {
    pub fn new(comment: Comment, caller: &User, likes: LikeSummary) -> Self {
        Self {
            is_author: is_author(caller, &comment),
            is_like: likes.liked_by_viewer,
            like_count: likes.count,
            pk: comment.id,
            post: comment.post_id,
            author: comment.author,
            text: comment.text,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}
