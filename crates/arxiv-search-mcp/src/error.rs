//! Error types for the arXiv search MCP server.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::time::Duration;

/// Errors from normalizing a catalog response body.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    /// The document has no root `feed` element.
    #[error("Invalid XML response from arXiv: missing root feed element")]
    MissingFeed,

    /// The document ended while elements were still open.
    #[error("Invalid XML response from arXiv: document ended inside <{0}>")]
    Truncated(String),

    /// Malformed XML.
    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Rate limited by the catalog (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Response body did not match the feed structure.
    #[error("Failed to parse arXiv response: {0}")]
    Parse(#[from] ParseError),
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Classify a reqwest failure, separating timeouts from other transport errors.
    #[must_use]
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() { Self::Timeout(timeout) } else { Self::Http(err) }
    }

    /// Returns true if this error is transient and the request may be reissued.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::RateLimited { .. } | Self::Timeout(_) | Self::Server { .. }
        )
    }
}

/// Failure of a search operation after retries are exhausted.
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// A catalog search failed.
    #[error("Failed to search arXiv: {0}")]
    Search(#[source] ClientError),

    /// A single-paper lookup failed.
    #[error("Failed to fetch paper {id}: {source}")]
    Paper {
        /// The requested arXiv identifier
        id: String,
        /// Underlying cause
        #[source]
        source: ClientError,
    },
}

impl SearchError {
    /// The underlying client error.
    #[must_use]
    pub const fn cause(&self) -> &ClientError {
        match self {
            Self::Search(source) | Self::Paper { source, .. } => source,
        }
    }

    /// Re-label a search failure as a failed lookup of `id`.
    #[must_use]
    pub fn for_paper(self, id: impl Into<String>) -> Self {
        match self {
            Self::Search(source) | Self::Paper { source, .. } => {
                Self::Paper { id: id.into(), source }
            }
        }
    }
}

/// Errors from MCP tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Search against the catalog failed
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Returns true if the caller supplied invalid parameters.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Convert to a user-friendly error message for MCP response.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Search(err) => match err.cause() {
                ClientError::RateLimited { retry_after } => format!(
                    "Rate limited by arXiv. Please wait {:?} before retrying.",
                    retry_after
                ),
                _ => err.to_string(),
            },
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_retryable() {
        assert!(ClientError::rate_limited(60).is_retryable());
        assert!(ClientError::Timeout(Duration::from_secs(10)).is_retryable());
        assert!(ClientError::server(503, "Service Unavailable").is_retryable());

        assert!(!ClientError::bad_request("malformed query").is_retryable());
        assert!(!ClientError::Parse(ParseError::MissingFeed).is_retryable());
        assert!(
            !ClientError::UnexpectedStatus { status: 404, message: String::new() }.is_retryable()
        );
    }

    #[test]
    fn test_rate_limited_from_seconds() {
        let err = ClientError::rate_limited(30);
        assert!(
            matches!(err, ClientError::RateLimited { retry_after } if retry_after == Duration::from_secs(30))
        );
    }

    #[test]
    fn test_search_error_messages_name_operation() {
        let err = SearchError::Search(ClientError::Timeout(Duration::from_secs(10)));
        assert_eq!(err.to_string(), "Failed to search arXiv: Request timed out after 10s");

        let err = err.for_paper("1706.03762");
        assert!(err.to_string().starts_with("Failed to fetch paper 1706.03762: "));
        assert!(matches!(err.cause(), ClientError::Timeout(_)));
    }

    #[test]
    fn test_parse_error_wrapped_message() {
        let err = ClientError::from(ParseError::MissingFeed);
        assert!(err.to_string().starts_with("Failed to parse arXiv response: "));
    }

    #[test]
    fn test_tool_error_user_message() {
        let err = ToolError::validation("query", "cannot be empty");
        assert!(err.is_validation());
        assert!(err.to_user_message().contains("query"));
        assert!(err.to_user_message().contains("cannot be empty"));
    }

    #[test]
    fn test_tool_error_rate_limit_message() {
        let err = ToolError::from(SearchError::Search(ClientError::rate_limited(5)));
        assert!(!err.is_validation());
        assert!(err.to_user_message().contains("Rate limited by arXiv"));
    }
}
