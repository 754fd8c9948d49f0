use axum::{Json, extract::State, http::StatusCode};

use crate::application::comments::dto::{CommentPatch, CommentPayload, CommentResponse};
use crate::presentation::http::{
    errors::AppError,
    extract::{ResourcePath, ValidatedJson},
    middleware::user::CurrentUser,
    state::AppState,
};

pub async fn list_comments(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ResourcePath((board_id, post_id)): ResourcePath<(i64, i64)>,
) -> Result<Json<Vec<CommentResponse>>, AppError> {
    Ok(Json(state.comments.list(&caller, board_id, post_id).await?))
}

pub async fn create_comment(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ResourcePath((board_id, post_id)): ResourcePath<(i64, i64)>,
    ValidatedJson(body): ValidatedJson<CommentPayload>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    let comment = state
        .comments
        .create(&caller, board_id, post_id, body)
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn get_comment(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ResourcePath((board_id, post_id, comment_id)): ResourcePath<(i64, i64, i64)>,
) -> Result<Json<CommentResponse>, AppError> {
    let comment = state
        .comments
        .get(&caller, board_id, post_id, comment_id)
        .await?;
    Ok(Json(comment))
}

pub async fn replace_comment(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ResourcePath((board_id, post_id, comment_id)): ResourcePath<(i64, i64, i64)>,
    ValidatedJson(body): ValidatedJson<CommentPayload>,
) -> Result<Json<CommentResponse>, AppError> {
    let comment = state
        .comments
        .update(&caller, board_id, post_id, comment_id, body.into())
        .await?;
    Ok(Json(comment))
}

pub async fn patch_comment(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ResourcePath((board_id, post_id, comment_id)): ResourcePath<(i64, i64, i64)>,
    ValidatedJson(body): ValidatedJson<CommentPatch>,
) -> Result<Json<CommentResponse>, AppError> {
    let comment = state
        .comments
        .update(&caller, board_id, post_id, comment_id, body)
        .await?;
    Ok(Json(comment))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ResourcePath((board_id, post_id, comment_id)): ResourcePath<(i64, i64, i64)>,
) -> Result<StatusCode, AppError> {
    state
        .comments
        .delete(&caller, board_id, post_id, comment_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
