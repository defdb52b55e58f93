//! arXiv API client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Atom feed parsing into [`Paper`] records
//! - Response caching with 5-minute TTL
//!
//! Requests are sent once; there is no retry layer.

mod feed;

pub use feed::parse_feed;

use std::sync::Arc;

use moka::future::Cache;
use reqwest::Client;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{Paper, SearchQuery, normalize_arxiv_id};

/// arXiv API client.
#[derive(Clone)]
pub struct ArxivClient {
    /// HTTP client.
    client: Client,

    /// Parsed result sets by query.
    cache: Cache<String, Arc<Vec<Paper>>>,

    /// Query endpoint.
    api_url: String,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        url::Url::parse(&config.api_url)?;

        let client = Client::builder()
            .user_agent(api::USER_AGENT)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(config.cache_max_size)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self { client, cache, api_url: config.api_url.clone() })
    }

    /// Run a search and parse the feed.
    ///
    /// Papers come back in feed order, at most `query.max_results()` of them.
    /// A body that does not parse yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-success status.
    pub async fn search(&self, query: &SearchQuery) -> ClientResult<Arc<Vec<Paper>>> {
        let url = query.to_url(&self.api_url)?;
        let cache_key = self.cache_key(url.as_str());
        if let Some(cached) = self.cache.get(&cache_key).await {
            tracing::debug!(query = query.text(), "Search served from cache");
            return Ok(cached);
        }

        let body = self.get_text(url).await?;
        let mut papers = parse_feed(&body);
        papers.truncate(query.max_results());
        tracing::debug!(query = query.text(), results = papers.len(), "Search completed");

        let papers = Arc::new(papers);
        self.cache.insert(cache_key, Arc::clone(&papers)).await;
        Ok(papers)
    }

    /// Look a single paper up by arXiv id (any accepted id form).
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-success status.
    pub async fn fetch_by_id(&self, id: &str) -> ClientResult<Option<Paper>> {
        let id = normalize_arxiv_id(id);
        if id.is_empty() {
            return Ok(None);
        }

        let url = url::Url::parse_with_params(
            &self.api_url,
            [("id_list", id.as_str()), ("max_results", "1")],
        )?;
        let body = self.get_text(url).await?;
        Ok(parse_feed(&body).into_iter().find(|p| p.matches_id(&id)))
    }

    /// Fetch a PDF (or any binary resource) in a single request.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-success status.
    pub async fn fetch_bytes(&self, url: &str) -> ClientResult<Vec<u8>> {
        tracing::debug!(url, "Fetching binary resource");
        let response = self.client.get(url).send().await?;
        let response = self.handle_response(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Make a GET request and return the body text.
    async fn get_text(&self, url: url::Url) -> ClientResult<String> {
        tracing::debug!(url = %url, "GET");
        let response = self.client.get(url).send().await?;
        let response = self.handle_response(response).await?;
        Ok(response.text().await?)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        match (status.as_u16(), retry_after) {
            (429, retry_after) => Err(ClientError::rate_limited(retry_after.unwrap_or(3))),
            (503, Some(retry_after)) => Err(ClientError::rate_limited(retry_after)),
            (code @ 500..=599, _) => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(code, text))
            }
            (code, _) => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: code, message: text })
            }
        }
    }

    /// Generate cache key.
    fn cache_key(&self, url: &str) -> String {
        use md5::{Digest, Md5};

        let mut hasher = Md5::new();
        hasher.update(b"GET|");
        hasher.update(url.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

impl std::fmt::Debug for ArxivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivClient").field("api_url", &self.api_url).finish()
    }
}
