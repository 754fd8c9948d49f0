use super::helpers::{
    call_json, create_board, create_comment, create_post, request, send, spawn_app,
};
use axum::http::{Method, StatusCode};

#[tokio::test]
async fn liking_a_post_twice_is_rejected() {
    let app = spawn_app();
    let (_, token) = app.user("alice");
    let board_id = create_board(&app.app, &token, "General").await;
    let post_id = create_post(&app.app, &token, board_id, "Thread").await;
    let like_uri = format!("/board/{}/post/{}/like/", board_id, post_id);

    let res = send(&app.app, request(Method::POST, &like_uri, Some(&token), None)).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = call_json(
        &app.app,
        request(Method::POST, &like_uri, Some(&token), None),
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(body["error"], "You have already liked this");

    let post = call_json(
        &app.app,
        request(
            Method::GET,
            &format!("/board/{}/post/{}/", board_id, post_id),
            Some(&token),
            None,
        ),
        StatusCode::OK,
    )
    .await;
    assert_eq!(post["like_count"], 1);
    assert_eq!(post["is_like"], true);
}

#[tokio::test]
async fn unlike_requires_an_existing_like() {
    let app = spawn_app();
    let (_, token) = app.user("alice");
    let board_id = create_board(&app.app, &token, "General").await;
    let post_id = create_post(&app.app, &token, board_id, "Thread").await;
    let like_uri = format!("/board/{}/post/{}/like/", board_id, post_id);

    let body = call_json(
        &app.app,
        request(Method::DELETE, &like_uri, Some(&token), None),
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(body["error"], "You have not liked this");

    send(&app.app, request(Method::POST, &like_uri, Some(&token), None)).await;
    let res = send(&app.app, request(Method::DELETE, &like_uri, Some(&token), None)).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.store.like_count(), 0);
}

#[tokio::test]
async fn like_count_is_per_viewer_aware() {
    let app = spawn_app();
    let (_, alice) = app.user("alice");
    let (_, bob) = app.user("bob");
    let (_, carol) = app.user("carol");
    let board_id = create_board(&app.app, &alice, "General").await;
    let post_id = create_post(&app.app, &alice, board_id, "Thread").await;
    let like_uri = format!("/board/{}/post/{}/like/", board_id, post_id);
    let post_uri = format!("/board/{}/post/{}/", board_id, post_id);

    for token in [&alice, &bob] {
        let res = send(&app.app, request(Method::POST, &like_uri, Some(token), None)).await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let seen_by_bob = call_json(
        &app.app,
        request(Method::GET, &post_uri, Some(&bob), None),
        StatusCode::OK,
    )
    .await;
    let seen_by_carol = call_json(
        &app.app,
        request(Method::GET, &post_uri, Some(&carol), None),
        StatusCode::OK,
    )
    .await;
    assert_eq!(seen_by_bob["like_count"], 2);
    assert_eq!(seen_by_bob["is_like"], true);
    assert_eq!(seen_by_carol["like_count"], 2);
    assert_eq!(seen_by_carol["is_like"], false);
}

#[tokio::test]
async fn likers_are_listed_by_username() {
    let app = spawn_app();
    let (_, alice) = app.user("alice");
    let (bob, bob_token) = app.user("bob");
    let board_id = create_board(&app.app, &alice, "General").await;
    let post_id = create_post(&app.app, &alice, board_id, "Thread").await;
    let like_uri = format!("/board/{}/post/{}/like/", board_id, post_id);

    let body = call_json(
        &app.app,
        request(Method::GET, &like_uri, Some(&alice), None),
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(body["error"], "No one has liked this yet");

    send(&app.app, request(Method::POST, &like_uri, Some(&bob_token), None)).await;
    let body = call_json(
        &app.app,
        request(Method::GET, &like_uri, Some(&alice), None),
        StatusCode::OK,
    )
    .await;
    let likers = body.as_array().expect("likers should be an array");
    assert_eq!(likers.len(), 1);
    assert_eq!(likers[0]["username"], "bob");
    assert_eq!(likers[0]["pk"], bob.pk.to_string());
}

#[tokio::test]
async fn comment_likes_follow_the_same_rules() {
    let app = spawn_app();
    let (_, alice) = app.user("alice");
    let (_, bob) = app.user("bob");
    let board_id = create_board(&app.app, &alice, "General").await;
    let post_id = create_post(&app.app, &alice, board_id, "Thread").await;
    let comment_id = create_comment(&app.app, &alice, board_id, post_id, "reply").await;
    let comment_uri = format!("/board/{}/post/{}/comment/{}/", board_id, post_id, comment_id);
    let like_uri = format!("{}like/", comment_uri);

    let res = send(&app.app, request(Method::POST, &like_uri, Some(&bob), None)).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let res = send(&app.app, request(Method::POST, &like_uri, Some(&bob), None)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let comment = call_json(
        &app.app,
        request(Method::GET, &comment_uri, Some(&bob), None),
        StatusCode::OK,
    )
    .await;
    assert_eq!(comment["like_count"], 1);
    assert_eq!(comment["is_like"], true);

    let likers = call_json(
        &app.app,
        request(Method::GET, &like_uri, Some(&alice), None),
        StatusCode::OK,
    )
    .await;
    assert_eq!(likers[0]["username"], "bob");

    let res = send(&app.app, request(Method::DELETE, &like_uri, Some(&bob), None)).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = send(&app.app, request(Method::DELETE, &like_uri, Some(&bob), None)).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn post_and_comment_likes_are_independent() {
    let app = spawn_app();
    let (_, token) = app.user("alice");
    let board_id = create_board(&app.app, &token, "General").await;
    let post_id = create_post(&app.app, &token, board_id, "Thread").await;
    let comment_id = create_comment(&app.app, &token, board_id, post_id, "reply").await;

    let res = send(
        &app.app,
        request(
            Method::POST,
            &format!("/board/{}/post/{}/like/", board_id, post_id),
            Some(&token),
            None,
        ),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let comment = call_json(
        &app.app,
        request(
            Method::GET,
            &format!("/board/{}/post/{}/comment/{}/", board_id, post_id, comment_id),
            Some(&token),
            None,
        ),
        StatusCode::OK,
    )
    .await;
    assert_eq!(comment["like_count"], 0);
    assert_eq!(comment["is_like"], false);
}

#[tokio::test]
async fn likes_on_missing_targets_are_not_found() {
    let app = spawn_app();
    let (_, token) = app.user("alice");
    let board_id = create_board(&app.app, &token, "General").await;

    for uri in [
        format!("/board/{}/post/77/like/", board_id),
        format!("/board/{}/post/77/comment/78/like/", board_id),
    ] {
        let res = send(&app.app, request(Method::POST, &uri, Some(&token), None)).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{}", uri);
    }

    let res = send(
        &app.app,
        request(Method::POST, &format!("/board/{}/post/77/like/", board_id), None, None),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}
