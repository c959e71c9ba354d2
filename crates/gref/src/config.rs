//! Configuration for gref.

use std::path::PathBuf;
use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Recommendations API endpoint.
    pub const RECOMMENDATIONS_API: &str = "https://api.semanticscholar.org/recommendations/v1";

    /// Public paper page, followed by the paper ID.
    pub const PAPER_PAGE: &str = "https://www.semanticscholar.org/paper/";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Rate limit delay between requests without API key.
    ///
    /// The unauthenticated pool is shared, so stay around 3 req/s.
    pub const RATE_LIMIT_DELAY: Duration = Duration::from_millis(350);

    /// Rate limit delay between requests with API key (10 req/s).
    pub const RATE_LIMIT_DELAY_WITH_KEY: Duration = Duration::from_millis(100);

    /// Cache TTL (5 minutes).
    pub const CACHE_TTL: Duration = Duration::from_secs(300);

    /// Maximum cache size.
    pub const CACHE_MAX_SIZE: u64 = 1000;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 4;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Paper field sets for API requests.
pub mod fields {
    /// Fields shown in search results.
    pub const SEARCH: &[&str] = &["paperId", "title", "authors", "year", "venue"];

    /// Everything stored for a collected article, including link lists.
    pub const ARTICLE: &[&str] = &[
        "paperId",
        "title",
        "abstract",
        "authors",
        "venue",
        "year",
        "publicationDate",
        "citationCount",
        "externalIds",
        "references.paperId",
        "citations.paperId",
    ];

    /// Fields requested for recommendations (IDs only).
    pub const LINK: &[&str] = &["paperId"];
}

/// Application defaults.
pub mod defaults {
    /// Root directory of the record store.
    pub const DATA_DIR: &str = "gref";

    /// Graph renderer binary.
    pub const DOT_PROGRAM: &str = "dot";

    /// Search results displayed per query.
    pub const SEARCH_LIMIT: i32 = 20;

    /// Articles fetched per GROW cycle.
    pub const GROW_BATCH: usize = 5;

    /// Recommendations stored per article.
    pub const SIMILAR_LIMIT: i32 = 5;
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Base URL for Graph API (for testing with mock servers).
    pub graph_api_url: String,

    /// Base URL for Recommendations API (for testing with mock servers).
    pub recommendations_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Rate limit delay between requests.
    pub rate_limit_delay: Duration,

    /// Cache TTL.
    pub cache_ttl: Duration,

    /// Maximum cache size.
    pub cache_max_size: u64,

    /// Root directory of the record store and exports.
    pub data_dir: PathBuf,

    /// Graph renderer binary.
    pub dot_program: String,

    /// Search results displayed per query.
    pub search_limit: i32,

    /// Articles fetched per GROW cycle.
    pub grow_batch: usize,

    /// Recommendations stored per article (0 disables the lookup).
    pub similar_limit: i32,
}

impl Config {
    /// Create a new configuration with optional API key.
    ///
    /// The rate limit is relaxed when a key is present.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        let has_key = api_key.is_some();
        Self {
            api_key,
            graph_api_url: api::GRAPH_API.to_string(),
            recommendations_api_url: api::RECOMMENDATIONS_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            rate_limit_delay: if has_key {
                api::RATE_LIMIT_DELAY_WITH_KEY
            } else {
                api::RATE_LIMIT_DELAY
            },
            cache_ttl: api::CACHE_TTL,
            cache_max_size: api::CACHE_MAX_SIZE,
            data_dir: PathBuf::from(defaults::DATA_DIR),
            dot_program: defaults::DOT_PROGRAM.to_string(),
            search_limit: defaults::SEARCH_LIMIT,
            grow_batch: defaults::GROW_BATCH,
            similar_limit: defaults::SIMILAR_LIMIT,
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            graph_api_url: format!("{}/graph/v1", base_url),
            recommendations_api_url: format!("{}/recommendations/v1", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            rate_limit_delay: Duration::from_millis(0), // No delay in tests
            cache_ttl: Duration::from_secs(0),          // No caching in tests
            cache_max_size: 0,
            ..Self::new(None)
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `SEMANTIC_SCHOLAR_API_KEY`, `GREF_HOME` and `GREF_DOT`, after
    /// loading a `.env` file if one is present.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let api_key = std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok().filter(|k| !k.is_empty());
        let mut config = Self::new(api_key);

        if let Ok(dir) = std::env::var("GREF_HOME") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(dot) = std::env::var("GREF_DOT") {
            if dot.trim().is_empty() {
                anyhow::bail!("GREF_DOT is set but empty");
            }
            config.dot_program = dot;
        }

        Ok(config)
    }

    /// Use a different record store root.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Use a different renderer binary.
    #[must_use]
    pub fn with_dot_program(mut self, program: impl Into<String>) -> Self {
        self.dot_program = program.into();
        self
    }

    /// Change the number of articles fetched per GROW cycle (at least one).
    #[must_use]
    pub fn with_grow_batch(mut self, batch: usize) -> Self {
        self.grow_batch = batch.max(1);
        self
    }

    /// Change the number of recommendations stored per article.
    #[must_use]
    pub fn with_similar_limit(mut self, limit: i32) -> Self {
        self.similar_limit = limit;
        self
    }

    /// Change the number of search results shown.
    #[must_use]
    pub fn with_search_limit(mut self, limit: i32) -> Self {
        self.search_limit = limit;
        self
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
