use crate::application::shared::validation::not_blank;
use crate::domain::{board::entity::Board, user::entity::User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

/// Body of `POST /board/` and `PUT /board/{id}/`.
#[derive(Debug, Clone, Deserialize, Validate, TS)]
#[ts(export)]
pub struct BoardPayload {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub title: String,
}

/// Body of `PATCH /board/{id}/`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate, TS)]
#[ts(export)]
pub struct BoardPatch {
    #[validate(length(max = 255), custom(function = "not_blank"))]
    pub title: Option<String>,
}

impl From<BoardPayload> for BoardPatch {
    fn from(payload: BoardPayload) -> Self {
        Self {
            title: Some(payload.title),
        }
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct BoardResponse {
    pub pk: i64,
    pub author: User,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Board> for BoardResponse {
    fn from(board: Board) -> Self {
        Self {
            pk: board.id,
            author: board.author,
            title: board.title,
            created_at: board.created_at,
            updated_at: board.updated_at,
        }
    }
}
