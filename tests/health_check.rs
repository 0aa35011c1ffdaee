mod common;

use common::spawn_app;

#[actix_web::test]
async fn health_check_works() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/api/health", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("health body is JSON");
    assert_eq!(body["status"], "OK");
    assert!(body["timestamp"].is_string());
}
