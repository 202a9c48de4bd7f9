use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sustainvec_pinecone::{PineconeStoreError, PineconeVectorStore};

#[tokio::test]
async fn builder_requires_api_key() {
    let err = PineconeVectorStore::builder()
        .base_url("https://reports.example")
        .build()
        .await
        .err()
        .unwrap();
    assert!(matches!(err, PineconeStoreError::Config(_)));
}

#[tokio::test]
async fn builder_requires_host_or_index_name() {
    let err = PineconeVectorStore::builder()
        .api_key("key")
        .build()
        .await
        .err()
        .unwrap();
    assert!(err.to_string().contains("base_url or index_name"));
}

#[tokio::test]
async fn builder_rejects_zero_batch_size() {
    let err = PineconeVectorStore::builder()
        .base_url("https://reports.example")
        .api_key("key")
        .max_batch_size(0)
        .build()
        .await
        .err()
        .unwrap();
    assert!(matches!(err, PineconeStoreError::Config(_)));
}

#[tokio::test]
async fn bare_host_gets_https_scheme() {
    let store = PineconeVectorStore::builder()
        .base_url("reports-abc123.svc.pinecone.io")
        .api_key("key")
        .build()
        .await
        .unwrap();
    assert_eq!(store.host(), "https://reports-abc123.svc.pinecone.io");
}

#[tokio::test]
async fn index_name_is_resolved_through_control_plane() {
    let control = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/indexes/reports"))
        .and(header("Api-Key", "key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "reports",
            "dimension": 1536,
            "host": "reports-abc123.svc.pinecone.io"
        })))
        .expect(1)
        .mount(&control)
        .await;

    let store = PineconeVectorStore::builder()
        .index_name("reports")
        .control_plane_url(control.uri())
        .api_key("key")
        .build()
        .await
        .unwrap();
    assert_eq!(store.host(), "https://reports-abc123.svc.pinecone.io");
}

#[tokio::test]
async fn explicit_host_skips_resolution() {
    let control = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"host": "unused"})))
        .expect(0)
        .mount(&control)
        .await;

    let store = PineconeVectorStore::builder()
        .base_url("https://direct.example")
        .index_name("reports")
        .control_plane_url(control.uri())
        .api_key("key")
        .build()
        .await
        .unwrap();
    assert_eq!(store.host(), "https://direct.example");
}

#[tokio::test]
async fn unknown_index_fails_build() {
    let control = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/indexes/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": {"message": "not found"}})))
        .mount(&control)
        .await;

    let err = PineconeVectorStore::builder()
        .index_name("missing")
        .control_plane_url(control.uri())
        .api_key("key")
        .build()
        .await
        .err()
        .unwrap();
    assert!(matches!(err, PineconeStoreError::Api { status: 404, .. }));
}

#[tokio::test]
async fn dimension_validation_queries_index_stats_without_failing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/describe_index_stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dimension": 1536,
            "totalVectorCount": 42
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = PineconeVectorStore::builder()
        .base_url(server.uri())
        .api_key("key")
        .dimension(3)
        .validate_dimension(true)
        .build()
        .await
        .unwrap();
    assert_eq!(store.host(), server.uri());
}

#[tokio::test]
async fn index_stats_are_typed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/describe_index_stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dimension": 1536,
            "totalVectorCount": 42,
            "namespaces": {"": {"vectorCount": 42}}
        })))
        .mount(&server)
        .await;

    let store = PineconeVectorStore::builder()
        .base_url(server.uri())
        .api_key("key")
        .build()
        .await
        .unwrap();

    let stats = store.describe_index_stats().await.unwrap();
    assert_eq!(stats.dimension, Some(1536));
    assert_eq!(stats.total_vector_count, Some(42));
}
