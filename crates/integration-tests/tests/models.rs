mod harness;

use harness::config::ConfigBuilder;
use harness::mock_provider::MockProvider;
use harness::server::TestServer;
use lotaya_config::{ImageProviderType, VideoProviderType};

#[tokio::test]
async fn models_endpoint_enumerates_configured_providers() {
    let mock = MockProvider::start().await.unwrap();
    let config = ConfigBuilder::new()
        .with_image_provider("groq", ImageProviderType::Groq, &mock.dialect_url("groq"))
        .with_image_provider("gemini", ImageProviderType::Gemini, &mock.dialect_url("gemini"))
        .with_video_provider("runway", VideoProviderType::Runway, &mock.dialect_url("runway"))
        .with_video_provider("sora", VideoProviderType::Sora, &mock.dialect_url("sora"))
        .build();
    let server = TestServer::start(config).await.unwrap();

    let resp = server.client().get(server.url("/api/models")).send().await.unwrap();

    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["image_models"], serde_json::json!(["groq", "gemini"]));
    assert_eq!(body["video_models"], serde_json::json!(["runway", "sora"]));

    let effects = body["effects"].as_array().unwrap();
    assert!(effects.contains(&serde_json::json!("ai_hug")));
    assert!(effects.contains(&serde_json::json!("eye_pop")));
}
