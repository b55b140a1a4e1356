mod common;

use axum::http::StatusCode;
use serde_json::Value as JsonValue;
use uuid::Uuid;

fn ids(body: &JsonValue) -> Vec<i64> {
    body["vacancies"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v["id"].as_i64())
        .collect()
}

#[tokio::test]
async fn search_matches_skills_or_title_ignoring_case() {
    let Some(app) = common::setup().await else {
        return;
    };
    let marker = format!("kw{}", &Uuid::new_v4().simple().to_string()[..10]);
    let (token, _) = app.register().await;
    app.create_company(&token, "Searchable").await;

    let by_skills = app
        .create_vacancy(&token, "Data engineer", &format!("Python, Django, {}", marker))
        .await;
    let by_title = app
        .create_vacancy(&token, &format!("{} lead", marker), "Go, Kafka")
        .await;
    let unrelated = app.create_vacancy(&token, "Designer", "Figma").await;

    let reply = app
        .get(&format!("/search?q={}", marker.to_uppercase()), None)
        .await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body["vacancies_count"], 2);
    assert_eq!(ids(&reply.body), vec![by_title, by_skills]);
    assert!(!ids(&reply.body).contains(&unrelated));

    let python = app.get("/search?q=python", None).await;
    assert!(ids(&python.body).contains(&by_skills));
    assert!(python.body["vacancies"].as_array().unwrap().iter().all(|v| {
        let text = format!("{} {}", v["title"], v["skills"]).to_lowercase();
        text.contains("python")
    }));
}

#[tokio::test]
async fn blank_query_returns_every_vacancy_with_examples() {
    let Some(app) = common::setup().await else {
        return;
    };
    let (token, _) = app.register().await;
    app.create_company(&token, "Everything").await;
    let first = app.create_vacancy(&token, "One", "Rust").await;
    let second = app
        .create_vacancy(&token, "Two", "Vue, React, Node, CSS, HTML")
        .await;

    for uri in ["/search", "/search?q=", "/search?q=%20%20"] {
        let reply = app.get(uri, None).await;
        assert_eq!(reply.status, StatusCode::OK, "{}", uri);
        assert_eq!(reply.body["query"], "");
        let found = ids(&reply.body);
        assert!(found.contains(&first) && found.contains(&second));
        assert_eq!(
            reply.body["vacancies_count"].as_u64().unwrap() as usize,
            found.len()
        );
        assert!(reply.body["examples"].as_array().unwrap().len() <= 4);
    }
}

#[tokio::test]
async fn wildcards_in_the_query_are_literal() {
    let Some(app) = common::setup().await else {
        return;
    };
    let marker = format!("pct{}", &Uuid::new_v4().simple().to_string()[..10]);
    let (token, _) = app.register().await;
    app.create_company(&token, "Literal").await;
    let exact = app
        .create_vacancy(&token, "Growth", &format!("{}100%", marker))
        .await;
    app.create_vacancy(&token, "Growth", &format!("{}1000", marker))
        .await;

    let reply = app
        .get(&format!("/search?q={}100%25", marker), None)
        .await;
    assert_eq!(ids(&reply.body), vec![exact]);
}
