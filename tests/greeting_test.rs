mod common;

use common::TestApp;
use reqwest::Client;

#[tokio::test]
async fn greeting_returns_hello_world() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/greeting", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type");
    assert!(content_type.starts_with("text/plain"));

    let body = response.text().await.expect("Failed to get response body");
    assert_eq!(body, "Hello, World!");
}

#[tokio::test]
async fn greeting_is_stable_across_requests() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    for _ in 0..3 {
        let response = client
            .get(&format!("{}/greeting", app.address))
            .send()
            .await
            .expect("Failed to execute request");

        assert!(response.status().is_success());
        let body = response.text().await.expect("Failed to get response body");
        assert_eq!(body, "Hello, World!");
    }
}
