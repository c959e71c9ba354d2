//! Semantic Scholar API client.
//!
//! Provides async HTTP client with:
//! - Retry middleware with exponential backoff
//! - A fixed delay before each request (rate limiting)
//! - Response caching with 5-minute TTL

use std::time::Duration;

use moka::future::Cache;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{Paper, PaperRef, RecommendationResult, SearchResult};

/// Semantic Scholar API client.
#[derive(Clone)]
pub struct SemanticScholarClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Response cache.
    cache: Cache<String, serde_json::Value>,

    /// API key (optional).
    api_key: Option<String>,

    /// Graph API base URL.
    graph_api_url: String,

    /// Recommendations API base URL.
    recommendations_api_url: String,

    /// Rate limit delay.
    rate_limit_delay: Duration,
}

impl SemanticScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        if let Some(ref key) = config.api_key {
            headers.insert("x-api-key", key.parse()?);
        }

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("gref/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
            .build_with_max_retries(3);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let cache = Cache::builder()
            .max_capacity(config.cache_max_size)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            client,
            cache,
            api_key: config.api_key.clone(),
            graph_api_url: config.graph_api_url.clone(),
            recommendations_api_url: config.recommendations_api_url.clone(),
            rate_limit_delay: config.rate_limit_delay,
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Search for papers, ranked by relevance.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_papers(
        &self,
        query: &str,
        limit: i32,
        fields: &[&str],
    ) -> ClientResult<SearchResult> {
        let url = format!("{}/paper/search", self.graph_api_url);

        let params = vec![
            ("query".to_string(), query.to_string()),
            ("offset".to_string(), "0".to_string()),
            ("limit".to_string(), limit.to_string()),
            ("fields".to_string(), fields.join(",")),
        ];

        self.get(&url, &params).await
    }

    /// Get a single paper by ID.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_paper(&self, paper_id: &str, fields: &[&str]) -> ClientResult<Paper> {
        let url = format!("{}/paper/{}", self.graph_api_url, paper_id);
        let params = vec![("fields".to_string(), fields.join(","))];

        self.get(&url, &params).await
    }

    /// Get IDs of papers similar to one paper.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_recommendations(&self, paper_id: &str, limit: i32) -> ClientResult<Vec<String>> {
        let url = format!("{}/papers/forpaper/{}", self.recommendations_api_url, paper_id);

        let params = vec![
            ("limit".to_string(), limit.to_string()),
            ("fields".to_string(), crate::config::fields::LINK.join(",")),
        ];

        let result: RecommendationResult = self.get(&url, &params).await?;
        Ok(PaperRef::resolved_ids(&result.recommended_papers))
    }

    /// Make a GET request.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        // Check cache
        let cache_key = self.cache_key("GET", url, params);
        if let Some(cached) = self.cache.get(&cache_key).await {
            tracing::debug!(url, "Cache hit");
            return serde_json::from_value(cached).map_err(ClientError::from);
        }

        // Rate limit
        tokio::time::sleep(self.rate_limit_delay).await;

        tracing::debug!(url, "GET");
        let response = self.client.get(url).query(params).send().await?;

        let response = self.handle_response(response).await?;
        let value: serde_json::Value = response.json().await?;

        // Cache response
        self.cache.insert(cache_key, value.clone()).await;

        serde_json::from_value(value).map_err(ClientError::from)
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

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }

    /// Generate cache key.
    fn cache_key(&self, method: &str, url: &str, params: &[(String, String)]) -> String {
        use md5::{Digest, Md5};

        let mut hasher = Md5::new();
        hasher.update(method.as_bytes());
        hasher.update(b"|");
        hasher.update(url.as_bytes());
        hasher.update(b"|");

        for (k, v) in params {
            hasher.update(k.as_bytes());
            hasher.update(b"=");
            hasher.update(v.as_bytes());
            hasher.update(b"&");
        }

        format!("{:x}", hasher.finalize())
    }
}

impl std::fmt::Debug for SemanticScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScholarClient").field("has_api_key", &self.has_api_key()).finish()
    }
}
