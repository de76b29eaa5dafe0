//! Configuration for the arXiv search MCP server.

use std::time::Duration;

use anyhow::Context;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv catalog query endpoint.
    pub const API_URL: &str = "http://export.arxiv.org/api/query";

    /// Base URL for synthesized PDF links.
    pub const PDF_BASE_URL: &str = "http://arxiv.org/pdf";

    /// Base URL for synthesized abstract-page links.
    pub const ABS_BASE_URL: &str = "http://arxiv.org/abs";

    /// Per-attempt request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Retries after the first attempt (4 attempts total).
    pub const MAX_RETRIES: u32 = 3;

    /// Fixed delay between attempts.
    pub const RETRY_DELAY: Duration = Duration::from_millis(1000);

    /// Default number of papers per search.
    pub const DEFAULT_MAX_RESULTS: u32 = 10;

    /// Upper bound accepted by `search_arxiv_papers`.
    pub const MAX_RESULTS_LIMIT: u32 = 50;

    /// Abstract characters shown in search listings.
    pub const ABSTRACT_PREVIEW_CHARS: usize = 300;
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog query endpoint (overridable for mock servers).
    pub api_url: String,

    /// Per-attempt request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Retries after the first attempt.
    pub max_retries: u32,

    /// Delay between attempts.
    pub retry_delay: Duration,

    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Config {
    /// Create the default production configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_url: api::API_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            max_retries: api::MAX_RETRIES,
            retry_delay: api::RETRY_DELAY,
            user_agent: default_user_agent(),
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_url: format!("{}/api/query", base_url.trim_end_matches('/')),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            max_retries: api::MAX_RETRIES,
            retry_delay: Duration::from_millis(0), // No backoff in tests
            user_agent: default_user_agent(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Recognized variables: `ARXIV_API_URL`, `ARXIV_MAX_RETRIES`,
    /// `ARXIV_RETRY_DELAY_MS`, `ARXIV_REQUEST_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns error if a numeric variable does not parse.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var("ARXIV_API_URL") {
            config.api_url = url;
        }
        if let Ok(raw) = std::env::var("ARXIV_MAX_RETRIES") {
            config.max_retries =
                raw.trim().parse().with_context(|| format!("invalid ARXIV_MAX_RETRIES: {raw}"))?;
        }
        if let Ok(raw) = std::env::var("ARXIV_RETRY_DELAY_MS") {
            let millis: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("invalid ARXIV_RETRY_DELAY_MS: {raw}"))?;
            config.retry_delay = Duration::from_millis(millis);
        }
        if let Ok(raw) = std::env::var("ARXIV_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("invalid ARXIV_REQUEST_TIMEOUT_SECS: {raw}"))?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Total attempts per logical request.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn default_user_agent() -> String {
    format!("arxiv-search-mcp/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_url, api::API_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.max_attempts(), 4);
        assert_eq!(config.retry_delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_config_for_testing() {
        let config = Config::for_testing("http://127.0.0.1:9999/");
        assert_eq!(config.api_url, "http://127.0.0.1:9999/api/query");
        assert_eq!(config.retry_delay, Duration::ZERO);
        assert_eq!(config.max_attempts(), 4);
    }

    #[test]
    fn test_max_attempts_saturates() {
        let config = Config { max_retries: u32::MAX, ..Config::default() };
        assert_eq!(config.max_attempts(), u32::MAX);
    }

    #[test]
    fn test_user_agent_names_crate() {
        let config = Config::new();
        assert!(config.user_agent.starts_with("arxiv-search-mcp/"));
    }
}
