//! ArxivClient tests against a mocked arXiv API.

mod common;

use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use arxiv_search::client::ArxivClient;
use arxiv_search::config::Config;
use arxiv_search::error::ClientError;
use arxiv_search::models::SearchQuery;

use common::{attention, feed, test_client, transformers_survey};

fn atom(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/atom+xml")
}

#[tokio::test]
async fn test_search_sends_relevance_query() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", "all:attention"))
        .and(query_param("sortBy", "relevance"))
        .and(query_param("sortOrder", "descending"))
        .and(query_param("max_results", "30"))
        .respond_with(atom(feed(&[attention(&base), transformers_survey(&base)])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = test_client(&mock_server, dir.path());
    let query = SearchQuery::new("attention", 30).unwrap();
    let papers = client.search(&query).await.unwrap();

    assert_eq!(papers.len(), 2);
    assert_eq!(papers[0].title.as_deref(), Some("Attention Is All You Need"));
    assert_eq!(papers[0].authors, vec!["Ashish Vaswani", "Noam Shazeer"]);
    assert_eq!(papers[1].category.as_deref(), Some("cs.LG"));
}

#[tokio::test]
async fn test_search_truncates_to_max_results() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(atom(feed(&[attention(&base), transformers_survey(&base)])))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = test_client(&mock_server, dir.path());
    let query = SearchQuery::new("attention", 1).unwrap();
    let papers = client.search(&query).await.unwrap();

    assert_eq!(papers.len(), 1);
}

#[tokio::test]
async fn test_search_malformed_body_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not a feed"))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = test_client(&mock_server, dir.path());
    let query = SearchQuery::new("anything", 30).unwrap();

    assert!(client.search(&query).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = test_client(&mock_server, dir.path());
    let query = SearchQuery::new("attention", 30).unwrap();
    let err = client.search(&query).await.unwrap_err();

    assert!(matches!(err, ClientError::Server { status: 500, .. }));
}

#[tokio::test]
async fn test_search_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = test_client(&mock_server, dir.path());
    let query = SearchQuery::new("attention", 30).unwrap();
    let err = client.search(&query).await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::RateLimited { retry_after } if retry_after == Duration::from_secs(7)
    ));
}

#[tokio::test]
async fn test_search_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = test_client(&mock_server, dir.path());
    let query = SearchQuery::new("attention", 30).unwrap();

    assert!(client.search(&query).await.is_err());
}

#[tokio::test]
async fn test_search_cache_serves_repeat_queries() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(atom(feed(&[attention(&base)])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::for_testing(&mock_server.uri(), dir.path());
    config.cache_ttl = Duration::from_secs(60);
    config.cache_max_size = 16;
    let client = ArxivClient::new(&config).unwrap();
    let query = SearchQuery::new("attention", 30).unwrap();

    let first = client.search(&query).await.unwrap();
    let second = client.search(&query).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_fetch_by_id_uses_id_list() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("id_list", "1706.03762"))
        .respond_with(atom(feed(&[attention(&base)])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = test_client(&mock_server, dir.path());
    let paper = client.fetch_by_id("https://arxiv.org/abs/1706.03762v7").await.unwrap();

    assert_eq!(paper.unwrap().arxiv_id(), "1706.03762v7");
}

#[tokio::test]
async fn test_fetch_by_id_unknown() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(atom(feed(&[])))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = test_client(&mock_server, dir.path());

    assert!(client.fetch_by_id("9999.99999").await.unwrap().is_none());
}

#[tokio::test]
async fn test_fetch_bytes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pdf/1706.03762v7"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4".to_vec()))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = test_client(&mock_server, dir.path());
    let url = format!("{}/pdf/1706.03762v7", mock_server.uri());

    assert_eq!(client.fetch_bytes(&url).await.unwrap(), b"%PDF-1.4");
}

#[test]
fn test_client_rejects_invalid_api_url() {
    let mut config = Config::default();
    config.api_url = "not a url".to_string();
    assert!(ArxivClient::new(&config).is_err());
}
