use super::helpers::{call_json, create_board, create_post, request, send, spawn_app};
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn post_is_created_under_its_board() {
    let app = spawn_app();
    let (user, token) = app.user("alice");
    let board_id = create_board(&app.app, &token, "General").await;

    let body = call_json(
        &app.app,
        request(
            Method::POST,
            &format!("/board/{}/post/", board_id),
            Some(&token),
            Some(json!({ "title": "Hello", "content": "First post" })),
        ),
        StatusCode::CREATED,
    )
    .await;

    assert_eq!(body["board"], board_id);
    assert_eq!(body["title"], "Hello");
    assert_eq!(body["content"], "First post");
    assert_eq!(body["author"]["pk"], user.pk.to_string());
    assert_eq!(body["is_author"], true);
    assert_eq!(body["is_like"], false);
    assert_eq!(body["like_count"], 0);
}

#[tokio::test]
async fn posts_need_both_fields() {
    let app = spawn_app();
    let (_, token) = app.user("alice");
    let board_id = create_board(&app.app, &token, "General").await;
    let uri = format!("/board/{}/post/", board_id);

    for body in [
        json!({ "title": "only title" }),
        json!({ "content": "only content" }),
        json!({ "title": " ", "content": "blank title" }),
        json!({ "title": "x".repeat(256), "content": "long title" }),
    ] {
        let res = send(
            &app.app,
            request(Method::POST, &uri, Some(&token), Some(body.clone())),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body {}", body);
    }
    assert_eq!(app.store.post_count(), 0);
}

#[tokio::test]
async fn posts_under_missing_board_are_not_found() {
    let app = spawn_app();
    let (_, token) = app.user("alice");

    let res = send(&app.app, request(Method::GET, "/board/42/post/", Some(&token), None)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = send(
        &app.app,
        request(
            Method::POST,
            "/board/42/post/",
            Some(&token),
            Some(json!({ "title": "t", "content": "c" })),
        ),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_is_not_reachable_through_another_board() {
    let app = spawn_app();
    let (_, token) = app.user("alice");
    let home = create_board(&app.app, &token, "Home").await;
    let away = create_board(&app.app, &token, "Away").await;
    let post_id = create_post(&app.app, &token, home, "Thread").await;

    let res = send(
        &app.app,
        request(Method::GET, &format!("/board/{}/post/{}/", away, post_id), Some(&token), None),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn board_lists_only_its_posts_newest_first() {
    let app = spawn_app();
    let (_, token) = app.user("alice");
    let board_id = create_board(&app.app, &token, "General").await;
    let other = create_board(&app.app, &token, "Other").await;
    create_post(&app.app, &token, board_id, "one").await;
    create_post(&app.app, &token, other, "elsewhere").await;
    create_post(&app.app, &token, board_id, "two").await;

    let body = call_json(
        &app.app,
        request(Method::GET, &format!("/board/{}/post/", board_id), Some(&token), None),
        StatusCode::OK,
    )
    .await;
    let titles: Vec<&str> = body
        .as_array()
        .expect("post list should be an array")
        .iter()
        .filter_map(|p| p["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["two", "one"]);
}

#[tokio::test]
async fn is_author_reflects_the_caller() {
    let app = spawn_app();
    let (_, author) = app.user("author");
    let (_, reader) = app.user("reader");
    let board_id = create_board(&app.app, &author, "General").await;
    let post_id = create_post(&app.app, &author, board_id, "Thread").await;
    let uri = format!("/board/{}/post/{}/", board_id, post_id);

    let as_author = call_json(
        &app.app,
        request(Method::GET, &uri, Some(&author), None),
        StatusCode::OK,
    )
    .await;
    let as_reader = call_json(
        &app.app,
        request(Method::GET, &uri, Some(&reader), None),
        StatusCode::OK,
    )
    .await;
    assert_eq!(as_author["is_author"], true);
    assert_eq!(as_reader["is_author"], false);
}

#[tokio::test]
async fn only_the_author_may_change_a_post() {
    let app = spawn_app();
    let (_, author) = app.user("author");
    let (_, other) = app.user("other");
    let board_id = create_board(&app.app, &author, "General").await;
    let post_id = create_post(&app.app, &author, board_id, "Thread").await;
    let uri = format!("/board/{}/post/{}/", board_id, post_id);

    for (method, body) in [
        (Method::PUT, Some(json!({ "title": "a", "content": "b" }))),
        (Method::PATCH, Some(json!({ "content": "b" }))),
        (Method::DELETE, None),
    ] {
        let res = send(&app.app, request(method.clone(), &uri, Some(&other), body)).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN, "{}", method);
    }

    let body = call_json(
        &app.app,
        request(Method::GET, &uri, Some(&author), None),
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["title"], "Thread");
    assert_eq!(body["content"], "Thread body");
}

#[tokio::test]
async fn put_requires_every_field_and_patch_does_not() {
    let app = spawn_app();
    let (_, token) = app.user("alice");
    let board_id = create_board(&app.app, &token, "General").await;
    let post_id = create_post(&app.app, &token, board_id, "Thread").await;
    let uri = format!("/board/{}/post/{}/", board_id, post_id);

    let res = send(
        &app.app,
        request(Method::PUT, &uri, Some(&token), Some(json!({ "title": "only" }))),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = call_json(
        &app.app,
        request(Method::PATCH, &uri, Some(&token), Some(json!({ "content": "edited" }))),
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["title"], "Thread");
    assert_eq!(body["content"], "edited");

    let body = call_json(
        &app.app,
        request(
            Method::PUT,
            &uri,
            Some(&token),
            Some(json!({ "title": "Renamed", "content": "rewritten" })),
        ),
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["title"], "Renamed");
    assert_eq!(body["content"], "rewritten");
}

#[tokio::test]
async fn deleting_a_post_removes_its_comments() {
    let app = spawn_app();
    let (_, token) = app.user("alice");
    let board_id = create_board(&app.app, &token, "General").await;
    let post_id = create_post(&app.app, &token, board_id, "Thread").await;
    super::helpers::create_comment(&app.app, &token, board_id, post_id, "reply").await;

    let uri = format!("/board/{}/post/{}/", board_id, post_id);
    let res = send(&app.app, request(Method::DELETE, &uri, Some(&token), None)).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.store.post_count(), 0);
    assert_eq!(app.store.comment_count(), 0);
    assert_eq!(app.store.board_count(), 1);
}
