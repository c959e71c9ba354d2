//! Configuration and client tests.
//!
//! Tests actual behavior, not constants.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gref::client::SemanticScholarClient;
use gref::config::{Config, fields};
use gref::error::ClientError;

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_default_has_no_api_key() {
    let config = Config::default();
    assert!(!config.has_api_key());
}

#[test]
fn test_config_with_api_key_relaxes_rate_limit() {
    let with_key = Config::new(Some("test-key".to_string()));
    let without = Config::default();
    assert!(with_key.has_api_key());
    assert!(with_key.rate_limit_delay < without.rate_limit_delay);
}

#[test]
fn test_config_builders() {
    let config = Config::default()
        .with_data_dir("/tmp/gref-data")
        .with_dot_program("/usr/local/bin/dot")
        .with_grow_batch(2)
        .with_search_limit(7)
        .with_similar_limit(0);

    assert_eq!(config.data_dir.to_str(), Some("/tmp/gref-data"));
    assert_eq!(config.dot_program, "/usr/local/bin/dot");
    assert_eq!(config.grow_batch, 2);
    assert_eq!(config.search_limit, 7);
    assert_eq!(config.similar_limit, 0);
}

#[test]
fn test_config_for_testing_points_at_mock() {
    let config = Config::for_testing("http://127.0.0.1:9");
    assert_eq!(config.graph_api_url, "http://127.0.0.1:9/graph/v1");
    assert_eq!(config.recommendations_api_url, "http://127.0.0.1:9/recommendations/v1");
    assert!(config.rate_limit_delay.is_zero());
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_debug_hides_api_key() {
    let config = Config::new(Some("super-secret-key".to_string()));
    let client = SemanticScholarClient::new(&config).unwrap();
    let debug = format!("{client:?}");
    assert!(!debug.contains("super-secret-key"));
    assert!(debug.contains("has_api_key"));
}

#[tokio::test]
async fn test_search_sends_query_and_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .and(query_param("query", "gene drive"))
        .and(query_param("limit", "3"))
        .and(query_param("fields", fields::SEARCH.join(",")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "offset": 0,
            "data": [{"paperId": "p1", "title": "Gene drives"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = SemanticScholarClient::new(&Config::for_testing(&mock_server.uri())).unwrap();
    let result = client.search_papers("gene drive", 3, fields::SEARCH).await.unwrap();

    assert_eq!(result.total, 1);
    assert_eq!(result.data[0].paper_id, "p1");
}

#[tokio::test]
async fn test_get_paper_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Paper not found"))
        .mount(&mock_server)
        .await;

    let client = SemanticScholarClient::new(&Config::for_testing(&mock_server.uri())).unwrap();
    let err = client.get_paper("missing", fields::ARTICLE).await.unwrap_err();

    assert!(matches!(err, ClientError::NotFound { .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_recommendations_skip_unresolved_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/recommendations/v1/papers/forpaper/p1"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommendedPapers": [{"paperId": "r1"}, {"paperId": null}, {"paperId": "r2"}]
        })))
        .mount(&mock_server)
        .await;

    let client = SemanticScholarClient::new(&Config::for_testing(&mock_server.uri())).unwrap();
    let ids = client.get_recommendations("p1", 2).await.unwrap();

    assert_eq!(ids, vec!["r1".to_string(), "r2".to_string()]);
}
