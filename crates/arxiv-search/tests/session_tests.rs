//! Search session tests: gating, degradation and latest-wins ordering.

mod common;

use std::time::Duration;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use arxiv_search::error::ToolError;
use arxiv_search::models::Category;
use arxiv_search::session::SearchSession;

use common::{attention, attention_math, feed, test_client, transformers_survey};

fn atom(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/atom+xml")
}

#[tokio::test]
async fn test_blank_text_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(atom(feed(&[])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = test_client(&mock_server, dir.path());
    let session = SearchSession::new(30);

    for text in ["", "   ", "\t\n"] {
        let papers = session.search(&client, text, Category::All).await.unwrap();
        assert!(papers.is_empty());
    }
    assert!(session.current().await.is_empty());
}

#[tokio::test]
async fn test_blank_text_clears_previous_results() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(atom(feed(&[attention(&base)])))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = test_client(&mock_server, dir.path());
    let session = SearchSession::new(30);

    session.search(&client, "attention", Category::All).await.unwrap();
    assert_eq!(session.current().await.len(), 1);

    session.search(&client, "", Category::All).await.unwrap();
    assert!(session.current().await.is_empty());
}

#[tokio::test]
async fn test_fetch_failure_shows_empty_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = test_client(&mock_server, dir.path());
    let session = SearchSession::new(30);

    let papers = session.search(&client, "attention", Category::All).await.unwrap();
    assert!(papers.is_empty());
}

#[tokio::test]
async fn test_results_ranked_then_filtered() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    // Feed order puts the weakest title match first.
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(atom(feed(&[
            transformers_survey(&base),
            attention_math(&base),
            attention(&base),
        ])))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = test_client(&mock_server, dir.path());
    let session = SearchSession::new(30);

    let all = session.search(&client, "attention is all you need", Category::All).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].title_or_default(), "Attention Is All You Need");

    let cs = session
        .search(&client, "attention is all you need", Category::ComputerScience)
        .await
        .unwrap();
    assert_eq!(cs.len(), 2);
    assert!(cs.iter().all(|p| p.category.as_deref().unwrap_or_default().starts_with("cs.")));

    let physics = session
        .search(&client, "attention is all you need", Category::Physics)
        .await
        .unwrap();
    assert_eq!(physics.len(), 3);

    let math = session
        .search(&client, "attention is all you need", Category::Mathematics)
        .await
        .unwrap();
    assert_eq!(math.len(), 1);
    assert_eq!(session.current().await, math);
}

#[tokio::test]
async fn test_newer_search_wins() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", "all:slow"))
        .respond_with(atom(feed(&[transformers_survey(&base)])).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", "all:fast"))
        .respond_with(atom(feed(&[attention(&base)])))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = test_client(&mock_server, dir.path());
    let session = SearchSession::new(30);

    let (older, newer) = tokio::join!(
        session.search(&client, "slow", Category::All),
        async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            session.search(&client, "fast", Category::All).await
        }
    );

    assert!(matches!(older, Err(ToolError::Superseded)));
    let newer = newer.unwrap();
    assert_eq!(newer.len(), 1);
    assert_eq!(newer[0].arxiv_id(), "1706.03762v7");

    // The cancelled search must not overwrite what the newer one shows.
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(session.current().await, newer);
}

#[tokio::test]
async fn test_resolve_prefers_shown_results() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", "all:attention"))
        .respond_with(atom(feed(&[attention(&base)])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = test_client(&mock_server, dir.path());
    let session = SearchSession::new(30);

    session.search(&client, "attention", Category::All).await.unwrap();
    let paper = session.resolve(&client, "arXiv:1706.03762").await.unwrap();
    assert_eq!(paper.title_or_default(), "Attention Is All You Need");
}

#[tokio::test]
async fn test_resolve_rejects_empty_id() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let client = test_client(&mock_server, dir.path());
    let session = SearchSession::new(30);

    let err = session.resolve(&client, "  ").await.unwrap_err();
    assert!(matches!(err, ToolError::Validation { .. }));
}

#[tokio::test]
async fn test_resolve_unknown_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("id_list", "0000.00000"))
        .respond_with(atom(feed(&[])))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = test_client(&mock_server, dir.path());
    let session = SearchSession::new(30);

    let err = session.resolve(&client, "0000.00000").await.unwrap_err();
    assert!(matches!(err, ToolError::NotFound(_)));
}
