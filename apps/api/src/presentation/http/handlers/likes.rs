//! Like sub-resource handlers for posts and comments. Successful like and
//! unlike calls answer with an empty body.

use axum::{Json, extract::State, http::StatusCode};

use crate::domain::user::entity::User;
use crate::presentation::http::{
    errors::AppError, extract::ResourcePath, middleware::user::CurrentUser, state::AppState,
};

pub async fn list_post_likers(
    State(state): State<AppState>,
    CurrentUser(_caller): CurrentUser,
    ResourcePath((board_id, post_id)): ResourcePath<(i64, i64)>,
) -> Result<Json<Vec<User>>, AppError> {
    let target = state.likes.resolve_post(board_id, post_id).await?;
    Ok(Json(state.likes.likers(target).await?))
}

pub async fn like_post(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ResourcePath((board_id, post_id)): ResourcePath<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    let target = state.likes.resolve_post(board_id, post_id).await?;
    state.likes.like(&caller, target).await?;
    Ok(StatusCode::CREATED)
}

pub async fn unlike_post(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ResourcePath((board_id, post_id)): ResourcePath<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    let target = state.likes.resolve_post(board_id, post_id).await?;
    state.likes.unlike(&caller, target).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_comment_likers(
    State(state): State<AppState>,
    CurrentUser(_caller): CurrentUser,
    ResourcePath((board_id, post_id, comment_id)): ResourcePath<(i64, i64, i64)>,
) -> Result<Json<Vec<User>>, AppError> {
    let target = state
        .likes
        .resolve_comment(board_id, post_id, comment_id)
        .await?;
    Ok(Json(state.likes.likers(target).await?))
}

pub async fn like_comment(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ResourcePath((board_id, post_id, comment_id)): ResourcePath<(i64, i64, i64)>,
) -> Result<StatusCode, AppError> {
    let target = state
        .likes
        .resolve_comment(board_id, post_id, comment_id)
        .await?;
    state.likes.like(&caller, target).await?;
    Ok(StatusCode::CREATED)
}

pub async fn unlike_comment(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ResourcePath((board_id, post_id, comment_id)): ResourcePath<(i64, i64, i64)>,
) -> Result<StatusCode, AppError> {
    let target = state
        .likes
        .resolve_comment(board_id, post_id, comment_id)
        .await?;
    state.likes.unlike(&caller, target).await?;
    Ok(StatusCode::NO_CONTENT)
}
