use super::helpers::{
    call_json, create_board, create_comment, create_post, request, send, spawn_app,
};
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn comment_is_attached_to_its_post() {
    let app = spawn_app();
    let (_, token) = app.user("alice");
    let board_id = create_board(&app.app, &token, "General").await;
    let post_id = create_post(&app.app, &token, board_id, "Thread").await;

    let body = call_json(
        &app.app,
        request(
            Method::POST,
            &format!("/board/{}/post/{}/comment/", board_id, post_id),
            Some(&token),
            Some(json!({ "text": "Nice thread" })),
        ),
        StatusCode::CREATED,
    )
    .await;

    assert_eq!(body["post"], post_id);
    assert_eq!(body["text"], "Nice thread");
    assert_eq!(body["author"]["username"], "alice");
    assert_eq!(body["is_author"], true);
    assert_eq!(body["is_like"], false);
    assert_eq!(body["like_count"], 0);
}

#[tokio::test]
async fn comment_text_is_validated() {
    let app = spawn_app();
    let (_, token) = app.user("alice");
    let board_id = create_board(&app.app, &token, "General").await;
    let post_id = create_post(&app.app, &token, board_id, "Thread").await;
    let uri = format!("/board/{}/post/{}/comment/", board_id, post_id);

    for body in [json!({}), json!({ "text": "" }), json!({ "text": "y".repeat(256) })] {
        let res = send(
            &app.app,
            request(Method::POST, &uri, Some(&token), Some(body.clone())),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body {}", body);
    }
    assert_eq!(app.store.comment_count(), 0);
}

#[tokio::test]
async fn comment_paths_must_nest() {
    let app = spawn_app();
    let (_, token) = app.user("alice");
    let board_id = create_board(&app.app, &token, "General").await;
    let other_board = create_board(&app.app, &token, "Other").await;
    let post_id = create_post(&app.app, &token, board_id, "Thread").await;
    let other_post = create_post(&app.app, &token, board_id, "Other thread").await;
    let comment_id = create_comment(&app.app, &token, board_id, post_id, "reply").await;

    for uri in [
        format!("/board/{}/post/{}/comment/{}/", board_id, other_post, comment_id),
        format!("/board/{}/post/{}/comment/{}/", other_board, post_id, comment_id),
        format!("/board/{}/post/{}/comment/", other_board, post_id),
        format!("/board/{}/post/{}/comment/999/", board_id, post_id),
    ] {
        let res = send(&app.app, request(Method::GET, &uri, Some(&token), None)).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{}", uri);
    }
}

#[tokio::test]
async fn comments_are_listed_newest_first() {
    let app = spawn_app();
    let (_, token) = app.user("alice");
    let board_id = create_board(&app.app, &token, "General").await;
    let post_id = create_post(&app.app, &token, board_id, "Thread").await;
    for text in ["a", "b", "c"] {
        create_comment(&app.app, &token, board_id, post_id, text).await;
    }

    let body = call_json(
        &app.app,
        request(
            Method::GET,
            &format!("/board/{}/post/{}/comment/", board_id, post_id),
            Some(&token),
            None,
        ),
        StatusCode::OK,
    )
    .await;
    let texts: Vec<&str> = body
        .as_array()
        .expect("comment list should be an array")
        .iter()
        .filter_map(|c| c["text"].as_str())
        .collect();
    assert_eq!(texts, vec!["c", "b", "a"]);
}

#[tokio::test]
async fn only_the_author_may_change_a_comment() {
    let app = spawn_app();
    let (_, author) = app.user("author");
    let (_, other) = app.user("other");
    let board_id = create_board(&app.app, &author, "General").await;
    let post_id = create_post(&app.app, &author, board_id, "Thread").await;
    let comment_id = create_comment(&app.app, &author, board_id, post_id, "mine").await;
    let uri = format!("/board/{}/post/{}/comment/{}/", board_id, post_id, comment_id);

    for (method, body) in [
        (Method::PUT, Some(json!({ "text": "theirs" }))),
        (Method::PATCH, Some(json!({ "text": "theirs" }))),
        (Method::DELETE, None),
    ] {
        let res = send(&app.app, request(method.clone(), &uri, Some(&other), body)).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN, "{}", method);
    }

    let body = call_json(
        &app.app,
        request(Method::GET, &uri, Some(&other), None),
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["text"], "mine");
    assert_eq!(body["is_author"], false);
}

#[tokio::test]
async fn author_can_edit_and_delete_a_comment() {
    let app = spawn_app();
    let (_, token) = app.user("alice");
    let board_id = create_board(&app.app, &token, "General").await;
    let post_id = create_post(&app.app, &token, board_id, "Thread").await;
    let comment_id = create_comment(&app.app, &token, board_id, post_id, "draft").await;
    let uri = format!("/board/{}/post/{}/comment/{}/", board_id, post_id, comment_id);

    let body = call_json(
        &app.app,
        request(Method::PUT, &uri, Some(&token), Some(json!({ "text": "final" }))),
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["text"], "final");

    let res = send(&app.app, request(Method::DELETE, &uri, Some(&token), None)).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = send(&app.app, request(Method::GET, &uri, Some(&token), None)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
