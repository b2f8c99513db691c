mod harness;

use harness::config::ConfigBuilder;
use harness::mock_provider::MockProvider;
use harness::server::TestServer;
use lotaya_config::ImageProviderType;

async fn groq_server(mock: &MockProvider) -> TestServer {
    let config = ConfigBuilder::new()
        .with_image_provider("groq", ImageProviderType::Groq, &mock.dialect_url("groq"))
        .build();
    TestServer::start(config).await.unwrap()
}

#[tokio::test]
async fn unknown_uuid_reports_not_found() {
    let mock = MockProvider::start().await.unwrap();
    let server = groq_server(&mock).await;

    let resp = server
        .client()
        .get(server.url("/api/generations/8a4f6c1e-3a88-4a1e-9d3e-5b2f1c7d9e0a"))
        .send()
        .await
        .unwrap();

    // A soft-fail shape, never an error status
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "not_found");
    assert_eq!(body["progress"], 0);
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn non_uuid_id_reports_not_found() {
    let mock = MockProvider::start().await.unwrap();
    let server = groq_server(&mock).await;

    for raw in ["test_id_123", "temp_id_123", "sample_generation_id"] {
        let body: serde_json::Value = server
            .client()
            .get(server.url(&format!("/api/generations/{raw}")))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["status"], "not_found");
        assert_eq!(body["generation_id"], raw);
        assert_eq!(body["progress"], 0);
    }
}

#[tokio::test]
async fn terminal_status_is_identical_across_polls() {
    let mock = MockProvider::start().await.unwrap();
    let server = groq_server(&mock).await;

    let body: serde_json::Value = server
        .client()
        .post(server.url("/api/generate/image"))
        .json(&serde_json::json!({ "prompt": "a sunset", "model": "groq" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = body["generation_id"].as_str().unwrap();

    let mut bodies = Vec::new();
    for _ in 0..3 {
        let text = server
            .client()
            .get(server.url(&format!("/api/generations/{id}")))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        bodies.push(text);
    }

    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);

    let parsed: serde_json::Value = serde_json::from_str(&bodies[0]).unwrap();
    assert_eq!(parsed["status"], "completed");
}

#[tokio::test]
async fn failed_generation_status_is_stable_too() {
    let mock = MockProvider::start_failing(1).await.unwrap();
    let server = groq_server(&mock).await;

    let body: serde_json::Value = server
        .client()
        .post(server.url("/api/generate/image"))
        .json(&serde_json::json!({ "prompt": "a sunset", "model": "groq" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], false);
    let id = body["generation_id"].as_str().unwrap();

    let first: serde_json::Value = server
        .client()
        .get(server.url(&format!("/api/generations/{id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: serde_json::Value = server
        .client()
        .get(server.url(&format!("/api/generations/{id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first["status"], "failed");
    assert!(first["error"].as_str().is_some());
    assert!(first.get("result_url").is_none());
}
