#![allow(dead_code)]

use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub const BOUNDARY: &str = "jobboard-test-boundary";
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: JsonValue,
    pub text: String,
}

impl Reply {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

/// Returns `None` when no database is configured so the suite can run without Postgres.
pub async fn setup() -> Option<TestApp> {
    dotenvy::dotenv().ok();
    if env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL is not set, skipping API test");
        return None;
    }
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("JWT_SECRET", "test_secret_key");
    env::set_var("PUBLIC_RPS", "10000");
    env::set_var(
        "UPLOADS_DIR",
        env::temp_dir().join("jobboard-test-media").to_string_lossy().to_string(),
    );
    let _ = jobboard_backend::config::init_config();

    let pool = jobboard_backend::database::pool::create_pool()
        .await
        .expect("pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    let state = jobboard_backend::AppState::new(pool.clone());
    Some(TestApp {
        router: jobboard_backend::routes::app(state),
        pool,
    })
}

pub fn unique_username() -> String {
    format!("u{}", &Uuid::new_v4().simple().to_string()[..12])
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> Reply {
        let resp = self.router.clone().oneshot(req).await.expect("response");
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.expect("body");
        let text = String::from_utf8_lossy(&bytes).to_string();
        let body = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
        Reply {
            status,
            headers,
            body,
            text,
        }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Reply {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> Reply {
        let req = Request::builder()
            .method("DELETE")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        self.send(req).await
    }

    pub async fn post_json(&self, uri: &str, token: Option<&str>, payload: JsonValue) -> Reply {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::from(payload.to_string())).unwrap())
            .await
    }

    pub async fn post_form(
        &self,
        uri: &str,
        token: &str,
        fields: &[(&str, String)],
        file: Option<(&str, &str, &[u8])>,
    ) -> Reply {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(multipart_body(fields, file)))
            .unwrap();
        self.send(req).await
    }

    /// Registers a fresh user and returns its token and id.
    pub async fn register(&self) -> (String, i64) {
        let username = unique_username();
        let reply = self
            .post_json(
                "/register",
                None,
                json!({
                    "username": username,
                    "first_name": "Test",
                    "last_name": "User",
                    "email": format!("{}@example.com", username),
                    "password": "s3cret-pass",
                    "repeat_password": "s3cret-pass",
                }),
            )
            .await;
        assert_eq!(reply.status, StatusCode::CREATED, "{}", reply.text);
        let token = reply.body["token"].as_str().expect("token").to_string();
        let id = reply.body["user"]["id"].as_i64().expect("user id");
        (token, id)
    }

    pub async fn create_company(&self, token: &str, name: &str) -> JsonValue {
        let reply = self
            .post_form("/mycompany/create", token, &company_fields(name), None)
            .await;
        assert_eq!(reply.status, StatusCode::SEE_OTHER, "{}", reply.text);
        self.get("/mycompany/", Some(token)).await.body["company"].clone()
    }

    pub async fn specialty_id(&self, code: &str) -> i64 {
        sqlx::query_scalar("SELECT id FROM specialties WHERE code = $1")
            .bind(code)
            .fetch_one(&self.pool)
            .await
            .expect("seeded specialty")
    }

    /// Creates a vacancy for the caller's company and returns its id.
    pub async fn create_vacancy(&self, token: &str, title: &str, skills: &str) -> i64 {
        let specialty_id = self.specialty_id("backend").await;
        let reply = self
            .post_json(
                "/vacancies/",
                Some(token),
                json!({
                    "title": title,
                    "specialty_id": specialty_id,
                    "skills": skills,
                    "description": "Build and run our services.",
                    "salary_min": 1000,
                    "salary_max": 2000,
                }),
            )
            .await;
        assert_eq!(reply.status, StatusCode::CREATED, "{}", reply.text);
        reply.body["id"].as_i64().expect("vacancy id")
    }
}

pub fn company_fields(name: &str) -> Vec<(&'static str, String)> {
    vec![
        ("name", name.to_string()),
        ("location", "Berlin".to_string()),
        ("description", "We build things.".to_string()),
        ("employee_count", "12".to_string()),
    ]
}

pub fn multipart_body(fields: &[(&str, String)], file: Option<(&str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }
    if let Some((name, file_name, data)) = file {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                BOUNDARY, name, file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}
