use axum::{Json, extract::State, http::StatusCode};

use crate::application::boards::dto::{BoardPatch, BoardPayload, BoardResponse};
use crate::presentation::http::{
    errors::AppError,
    extract::{ResourcePath, ValidatedJson},
    middleware::user::CurrentUser,
    state::AppState,
};

pub async fn list_boards(
    State(state): State<AppState>,
    CurrentUser(_caller): CurrentUser,
) -> Result<Json<Vec<BoardResponse>>, AppError> {
    Ok(Json(state.boards.list().await?))
}

pub async fn create_board(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ValidatedJson(body): ValidatedJson<BoardPayload>,
) -> Result<(StatusCode, Json<BoardResponse>), AppError> {
    let board = state.boards.create(&caller, body).await?;
    Ok((StatusCode::CREATED, Json(board)))
}

pub async fn get_board(
    State(state): State<AppState>,
    CurrentUser(_caller): CurrentUser,
    ResourcePath(board_id): ResourcePath<i64>,
) -> Result<Json<BoardResponse>, AppError> {
    Ok(Json(state.boards.get(board_id).await?))
}

pub async fn replace_board(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ResourcePath(board_id): ResourcePath<i64>,
    ValidatedJson(body): ValidatedJson<BoardPayload>,
) -> Result<Json<BoardResponse>, AppError> {
    Ok(Json(state.boards.update(&caller, board_id, body.into()).await?))
}

pub async fn patch_board(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ResourcePath(board_id): ResourcePath<i64>,
    ValidatedJson(body): ValidatedJson<BoardPatch>,
) -> Result<Json<BoardResponse>, AppError> {
    Ok(Json(state.boards.update(&caller, board_id, body).await?))
}

pub async fn delete_board(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ResourcePath(board_id): ResourcePath<i64>,
) -> Result<StatusCode, AppError> {
    state.boards.delete(&caller, board_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
