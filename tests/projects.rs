mod common;

use common::spawn_app;
use serde_json::json;

#[actix_web::test]
async fn creating_a_project_appends_one_with_the_next_id() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let before = app.store.project_count();

    let response = client
        .post(format!("{}/api/projects", app.address))
        .json(&json!({
            "name": "Data Dashboard",
            "description": "Analytics and reporting dashboard",
            "technology": "Rust + Actix"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("envelope is JSON");

    assert_eq!(body["id"], (before as i64) + 1);
    assert_eq!(body["item"]["status"], "active");
    assert_eq!(app.store.project_count(), before + 1);
}

#[actix_web::test]
async fn listing_projects_preserves_insertion_order() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    for name in ["first", "second"] {
        client
            .post(format!("{}/api/projects", app.address))
            .json(&json!({ "name": name, "description": "", "technology": "Rust" }))
            .send()
            .await
            .expect("Failed to execute request.");
    }

    let response = client
        .get(format!("{}/api/projects", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    let body: serde_json::Value = response.json().await.expect("envelope is JSON");
    let list = body["list"].as_array().expect("list of projects");

    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "first");
    assert_eq!(list[1]["name"], "second");
    assert_eq!(list[0]["id"], 1);
    assert_eq!(list[1]["id"], 2);
}

#[actix_web::test]
async fn missing_body_fields_default_to_empty_strings() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/projects", app.address))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("envelope is JSON");
    assert_eq!(body["item"]["name"], "");
    assert_eq!(body["item"]["technology"], "");
    assert_eq!(app.store.project_count(), 1);
}

#[actix_web::test]
async fn fetching_a_project_by_id_works() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{}/api/projects", app.address))
        .json(&json!({ "name": "Solo", "description": "", "technology": "Rust" }))
        .send()
        .await
        .expect("Failed to execute request.");

    let response = client
        .get(format!("{}/api/projects/1", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("envelope is JSON");
    assert_eq!(body["item"]["name"], "Solo");
}

#[actix_web::test]
async fn fetching_an_unknown_project_returns_a_404_envelope() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/projects/99", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.expect("envelope is JSON");
    assert_eq!(body["status"], "Error");
    assert_eq!(body["code"], 404);
}
