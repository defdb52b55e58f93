//! Configuration for the arXiv search extension.

use std::path::PathBuf;
use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv Atom query endpoint.
    pub const QUERY_API: &str = "https://export.arxiv.org/api/query";

    /// Landing page base for abstract URLs.
    pub const ABS_BASE: &str = "https://arxiv.org/abs";

    /// PDF base for derived PDF links.
    pub const PDF_BASE: &str = "https://arxiv.org/pdf";

    /// Fixed page size for every search.
    pub const PAGE_SIZE: usize = 30;

    /// Request timeout (PDFs can be several megabytes).
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Cache TTL (5 minutes).
    pub const CACHE_TTL: Duration = Duration::from_secs(300);

    /// Maximum cached queries.
    pub const CACHE_MAX_SIZE: u64 = 256;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 4;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// User agent sent with every request.
    pub const USER_AGENT: &str = concat!("arxiv-search/", env!("CARGO_PKG_VERSION"));
}

/// Environment variable naming the PDF download directory.
pub const DOWNLOAD_DIR_ENV: &str = "ARXIV_DOWNLOAD_DIR";

/// Environment variable overriding the query endpoint.
pub const API_URL_ENV: &str = "ARXIV_API_URL";

/// Extension configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Query endpoint (overridable for mock servers).
    pub api_url: String,

    /// Base directory for downloaded PDFs.
    pub download_dir: PathBuf,

    /// Maximum results requested per search.
    pub max_results: usize,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Cache TTL.
    pub cache_ttl: Duration,

    /// Maximum cache size.
    pub cache_max_size: u64,
}

impl Config {
    /// Create a configuration with an optional download directory.
    ///
    /// Without one, PDFs go to the per-user data directory of the extension.
    #[must_use]
    pub fn new(download_dir: Option<PathBuf>) -> Self {
        Self {
            api_url: api::QUERY_API.to_string(),
            download_dir: download_dir.unwrap_or_else(default_download_dir),
            max_results: api::PAGE_SIZE,
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            cache_ttl: api::CACHE_TTL,
            cache_max_size: api::CACHE_MAX_SIZE,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            api_url: format!("{base_url}/api/query"),
            download_dir: download_dir.into(),
            max_results: api::PAGE_SIZE,
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            cache_ttl: Duration::from_secs(0), // No caching in tests
            cache_max_size: 0,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let download_dir = std::env::var_os(DOWNLOAD_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let mut config = Self::new(download_dir);

        if let Ok(api_url) = std::env::var(API_URL_ENV) {
            url::Url::parse(&api_url)
                .map_err(|e| anyhow::anyhow!("invalid {API_URL_ENV} '{api_url}': {e}"))?;
            config.api_url = api_url;
        }

        Ok(config)
    }

    /// Replace the download directory.
    #[must_use]
    pub fn with_download_dir(mut self, download_dir: impl Into<PathBuf>) -> Self {
        self.download_dir = download_dir.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Per-user storage for downloaded PDFs, falling back to the working directory.
#[must_use]
pub fn default_download_dir() -> PathBuf {
    directories::ProjectDirs::from("org", "arxiv-search", "arxiv-search")
        .map(|dirs| dirs.data_dir().join("downloads"))
        .unwrap_or_else(|| PathBuf::from("downloads"))
}
