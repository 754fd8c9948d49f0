use super::{
    handlers::{boards, comments, health, likes, posts},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{Router, middleware, routing::get};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Boards
        .route(
            "/board/",
            get(boards::list_boards).post(boards::create_board),
        )
        .route(
            "/board/{board_id}/",
            get(boards::get_board)
                .put(boards::replace_board)
                .patch(boards::patch_board)
                .delete(boards::delete_board),
        )
        // Posts
        .route(
            "/board/{board_id}/post/",
            get(posts::list_posts).post(posts::create_post),
        )
        .route(
            "/board/{board_id}/post/{post_id}/",
            get(posts::get_post)
                .put(posts::replace_post)
                .patch(posts::patch_post)
                .delete(posts::delete_post),
        )
        .route(
            "/board/{board_id}/post/{post_id}/like/",
            get(likes::list_post_likers)
                .post(likes::like_post)
                .delete(likes::unlike_post),
        )
        // Comments
        .route(
            "/board/{board_id}/post/{post_id}/comment/",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/board/{board_id}/post/{post_id}/comment/{comment_id}/",
            get(comments::get_comment)
                .put(comments::replace_comment)
                .patch(comments::patch_comment)
                .delete(comments::delete_comment),
        )
        .route(
            "/board/{board_id}/post/{post_id}/comment/{comment_id}/like/",
            get(likes::list_comment_likers)
                .post(likes::like_comment)
                .delete(likes::unlike_comment),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
