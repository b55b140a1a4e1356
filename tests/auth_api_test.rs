mod common;

use std::time::{Duration, Instant};

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn register_then_login_issues_tokens() {
    let Some(app) = common::setup().await else {
        return;
    };
    let username = common::unique_username();
    let register = app
        .post_json(
            "/register",
            None,
            json!({
                "username": username,
                "first_name": "Ann",
                "last_name": "Lee",
                "email": "ann@example.com",
                "password": "long-enough",
                "repeat_password": "long-enough",
            }),
        )
        .await;
    assert_eq!(register.status, StatusCode::CREATED, "{}", register.text);
    assert_eq!(register.body["token_type"], "Bearer");
    assert_eq!(register.body["user"]["username"], username.as_str());
    assert!(register.body["user"].get("password_hash").is_none());

    let login = app
        .post_json(
            "/login",
            None,
            json!({ "username": username, "password": "long-enough" }),
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
    let token = login.body["token"].as_str().unwrap();

    let resumes = app.get("/resumes/", Some(token)).await;
    assert_eq!(resumes.status, StatusCode::OK);
}

#[tokio::test]
async fn duplicate_username_conflicts() {
    let Some(app) = common::setup().await else {
        return;
    };
    let username = common::unique_username();
    let payload = json!({
        "username": username,
        "first_name": "Ann",
        "last_name": "Lee",
        "email": "ann@example.com",
        "password": "long-enough",
        "repeat_password": "long-enough",
    });
    let first = app.post_json("/register", None, payload.clone()).await;
    assert_eq!(first.status, StatusCode::CREATED);
    let second = app.post_json("/register", None, payload).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn mismatched_passwords_are_rejected() {
    let Some(app) = common::setup().await else {
        return;
    };
    let reply = app
        .post_json(
            "/register",
            None,
            json!({
                "username": common::unique_username(),
                "first_name": "Ann",
                "last_name": "Lee",
                "email": "ann@example.com",
                "password": "long-enough",
                "repeat_password": "long-enougH",
            }),
        )
        .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["error"], "Validation failed");
}

#[tokio::test]
async fn failed_logins_look_the_same() {
    let Some(app) = common::setup().await else {
        return;
    };
    let (_, _) = app.register().await;
    let unknown = app
        .post_json(
            "/login",
            None,
            json!({ "username": common::unique_username(), "password": "whatever1" }),
        )
        .await;
    let username = common::unique_username();
    app.post_json(
        "/register",
        None,
        json!({
            "username": username,
            "first_name": "Ann",
            "last_name": "Lee",
            "email": "ann@example.com",
            "password": "long-enough",
            "repeat_password": "long-enough",
        }),
    )
    .await;
    let wrong_password = app
        .post_json(
            "/login",
            None,
            json!({ "username": username, "password": "not-the-one" }),
        )
        .await;

    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body, wrong_password.body);
}

async fn average_login_time(app: &common::TestApp, username: &str, rounds: u32) -> Duration {
    let started = Instant::now();
    for _ in 0..rounds {
        let reply = app
            .post_json(
                "/login",
                None,
                json!({ "username": username, "password": "not-the-one" }),
            )
            .await;
        assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
    }
    started.elapsed() / rounds
}

#[tokio::test]
async fn unknown_user_login_takes_as_long_as_a_wrong_password() {
    let Some(app) = common::setup().await else {
        return;
    };
    let (_, user_id) = app.register().await;
    let username: String = sqlx::query_scalar("SELECT username FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    let stranger = common::unique_username();

    average_login_time(&app, &stranger, 1).await;
    average_login_time(&app, &username, 1).await;
    let unknown = average_login_time(&app, &stranger, 4).await;
    let wrong_password = average_login_time(&app, &username, 4).await;

    assert!(
        unknown * 4 >= wrong_password,
        "unknown user {:?} vs wrong password {:?}",
        unknown,
        wrong_password
    );
}

#[tokio::test]
async fn owner_area_needs_a_token() {
    let Some(app) = common::setup().await else {
        return;
    };
    assert_eq!(app.get("/mycompany/", None).await.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        app.get("/mycompany/", Some("not-a-jwt")).await.status,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(app.get("/resumes/", None).await.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_unknown_routes_and_forms() {
    let Some(app) = common::setup().await else {
        return;
    };
    let logout = app.get("/logout", None).await;
    assert_eq!(logout.status, StatusCode::SEE_OTHER);
    assert_eq!(logout.location(), Some("/"));

    let missing = app.get("/no/such/page", None).await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.text, "Resource not found");

    let form = app.get("/register", None).await;
    assert_eq!(form.status, StatusCode::OK);
    assert_eq!(form.body["form"], "register");

    let health = app.get("/health", None).await;
    assert_eq!(health.body["status"], "ok");
}
