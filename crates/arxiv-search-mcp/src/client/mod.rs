//! arXiv catalog client.
//!
//! Provides async search with:
//! - Connection pooling via reqwest
//! - Per-attempt timeout
//! - Fixed-interval retry on transient failures (4 attempts by default)
//! - Atom feed normalization into [`Paper`] records

mod retry;

pub use retry::{RetryPolicy, Transient};

use anyhow::Context;
use reqwest::{Client, Url};

use crate::config::Config;
use crate::error::{ClientError, ClientResult, SearchError, SearchResult};
use crate::feed;
use crate::models::{Paper, SearchParams, SearchResponse};

/// arXiv catalog client.
#[derive(Clone)]
pub struct ArxivClient {
    /// HTTP client.
    client: Client,

    /// Catalog query endpoint.
    api_url: Url,

    /// Retry budget for each logical request.
    retry: RetryPolicy,

    /// Per-attempt timeout, reported in timeout errors.
    request_timeout: std::time::Duration,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint URL is invalid or HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let api_url = Url::parse(&config.api_url)
            .with_context(|| format!("invalid arXiv API URL: {}", config.api_url))?;

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            api_url,
            retry: RetryPolicy::from_config(&config),
            request_timeout: config.request_timeout,
        })
    }

    /// Search the catalog.
    ///
    /// Transport failures are retried; a body that is not a valid feed is not.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Search`] once retries are exhausted or the body fails to parse.
    pub async fn search_papers(&self, params: &SearchParams) -> SearchResult<SearchResponse> {
        let url = self.search_url(params);
        tracing::debug!(%url, "Querying arXiv");

        let body = self.retry.run(|| self.fetch(url.clone())).await.map_err(SearchError::Search)?;

        let response = feed::normalize(&body)
            .map_err(|e| SearchError::Search(ClientError::Parse(e)))?;

        tracing::debug!(
            papers = response.papers.len(),
            total = response.total_results,
            "arXiv search complete"
        );

        Ok(response)
    }

    /// Look up a single paper by arXiv ID.
    ///
    /// Returns `Ok(None)` when the catalog has no such paper.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Paper`] on network or parse failure.
    pub async fn get_paper_by_id(&self, arxiv_id: &str) -> SearchResult<Option<Paper>> {
        let params = SearchParams::new(format!("id:{arxiv_id}")).with_max_results(1);

        let response =
            self.search_papers(&params).await.map_err(|e| e.for_paper(arxiv_id))?;

        Ok(response.papers.into_iter().next())
    }

    /// Full request URL for `params`.
    #[must_use]
    pub fn search_url(&self, params: &SearchParams) -> Url {
        let mut url = self.api_url.clone();
        url.query_pairs_mut().extend_pairs(params.query_pairs());
        url
    }

    /// One GET attempt returning the response body.
    async fn fetch(&self, url: Url) -> ClientResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, self.request_timeout))?;

        let response = self.handle_response(response).await?;

        response.text().await.map_err(|e| ClientError::from_reqwest(e, self.request_timeout))
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
}

impl std::fmt::Debug for ArxivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivClient")
            .field("api_url", &self.api_url.as_str())
            .field("retry", &self.retry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SortBy, SortOrder};

    #[test]
    fn test_search_url_encodes_query() {
        let client = ArxivClient::new(Config::for_testing("http://localhost:1")).unwrap();
        let params = SearchParams::new(r#"all:graph AND (au:"de silva")"#)
            .with_sort(SortBy::LastUpdated, SortOrder::Descending);

        let url = client.search_url(&params);
        let pairs: Vec<(String, String)> =
            url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();

        assert_eq!(url.path(), "/api/query");
        assert!(pairs.contains(&("search_query".into(), r#"all:graph AND (au:"de silva")"#.into())));
        assert!(pairs.contains(&("sortBy".into(), "lastUpdatedDate".into())));
        assert!(pairs.contains(&("sortOrder".into(), "descending".into())));
        assert!(pairs.contains(&("start".into(), "0".into())));
    }

    #[test]
    fn test_invalid_api_url_rejected() {
        let config = Config { api_url: "not a url".into(), ..Config::default() };
        assert!(ArxivClient::new(config).is_err());
    }

    #[test]
    fn test_debug_output() {
        let client = ArxivClient::new(Config::default()).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("export.arxiv.org"));
    }
}
