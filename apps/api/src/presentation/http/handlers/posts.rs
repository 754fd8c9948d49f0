use axum::{Json, extract::State, http::StatusCode};

use crate::application::posts::dto::{PostPatch, PostPayload, PostResponse};
use crate::presentation::http::{
    errors::AppError,
    extract::{ResourcePath, ValidatedJson},
    middleware::user::CurrentUser,
    state::AppState,
};

pub async fn list_posts(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ResourcePath(board_id): ResourcePath<i64>,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    Ok(Json(state.posts.list(&caller, board_id).await?))
}

pub async fn create_post(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ResourcePath(board_id): ResourcePath<i64>,
    ValidatedJson(body): ValidatedJson<PostPayload>,
) -> Result<(StatusCode, Json<PostResponse>), AppError> {
    let post = state.posts.create(&caller, board_id, body).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn get_post(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ResourcePath((board_id, post_id)): ResourcePath<(i64, i64)>,
) -> Result<Json<PostResponse>, AppError> {
    Ok(Json(state.posts.get(&caller, board_id, post_id).await?))
}

pub async fn replace_post(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ResourcePath((board_id, post_id)): ResourcePath<(i64, i64)>,
    ValidatedJson(body): ValidatedJson<PostPayload>,
) -> Result<Json<PostResponse>, AppError> {
    let post = state
        .posts
        .update(&caller, board_id, post_id, body.into())
        .await?;
    Ok(Json(post))
}

pub async fn patch_post(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ResourcePath((board_id, post_id)): ResourcePath<(i64, i64)>,
    ValidatedJson(body): ValidatedJson<PostPatch>,
) -> Result<Json<PostResponse>, AppError> {
    Ok(Json(state.posts.update(&caller, board_id, post_id, body).await?))
}

pub async fn delete_post(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ResourcePath((board_id, post_id)): ResourcePath<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    state.posts.delete(&caller, board_id, post_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
