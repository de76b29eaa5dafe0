//! Input models for MCP tool parameters.

use serde::{Deserialize, Serialize};

use super::{ResponseFormat, SortBy, SortOrder};
use crate::config::api;
use crate::error::{ToolError, ToolResult};

/// Input for `search_arxiv_papers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPapersInput {
    /// Natural-language description of the papers wanted.
    #[serde(default)]
    pub query: String,

    /// Papers to return, 1 to 50.
    #[serde(default = "default_max_results")]
    pub max_results: i64,

    /// Offset of the first result.
    #[serde(default)]
    pub start: i64,

    /// Ordering key.
    #[serde(default)]
    pub sort_by: SortBy,

    /// Ordering direction.
    #[serde(default)]
    pub sort_order: SortOrder,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

fn default_max_results() -> i64 {
    i64::from(api::DEFAULT_MAX_RESULTS)
}

impl SearchPapersInput {
    /// Decode and validate raw tool arguments.
    pub fn from_arguments(arguments: serde_json::Value) -> ToolResult<Self> {
        let input: Self = decode(arguments)?;
        input.validate()?;
        Ok(input)
    }

    /// Check field constraints.
    pub fn validate(&self) -> ToolResult<()> {
        if self.query.trim().is_empty() {
            return Err(ToolError::validation(
                "query",
                "Query parameter is required and must be a non-empty string",
            ));
        }

        let limit = i64::from(api::MAX_RESULTS_LIMIT);
        if !(1..=limit).contains(&self.max_results) {
            return Err(ToolError::validation(
                "max_results",
                format!("max_results must be between 1 and {limit}"),
            ));
        }

        if self.start < 0 || self.start > i64::from(u32::MAX) {
            return Err(ToolError::validation("start", "start must be a non-negative integer"));
        }

        Ok(())
    }

    /// Validated page size.
    #[must_use]
    pub fn page_size(&self) -> u32 {
        u32::try_from(self.max_results).unwrap_or(api::DEFAULT_MAX_RESULTS)
    }

    /// Validated offset.
    #[must_use]
    pub fn offset(&self) -> u32 {
        u32::try_from(self.start).unwrap_or(0)
    }
}

/// Input for `get_arxiv_paper`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPaperInput {
    /// arXiv identifier, e.g. "1706.03762".
    #[serde(default)]
    pub arxiv_id: String,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

impl GetPaperInput {
    /// Decode and validate raw tool arguments.
    pub fn from_arguments(arguments: serde_json::Value) -> ToolResult<Self> {
        let input: Self = decode(arguments)?;
        input.validate()?;
        Ok(input)
    }

    /// Check field constraints.
    pub fn validate(&self) -> ToolResult<()> {
        if self.arxiv_id.trim().is_empty() {
            return Err(ToolError::validation(
                "arxiv_id",
                "arxiv_id parameter is required and must be a non-empty string",
            ));
        }
        Ok(())
    }

    /// Identifier with surrounding whitespace removed.
    #[must_use]
    pub fn id(&self) -> &str {
        self.arxiv_id.trim()
    }
}

fn decode<T: serde::de::DeserializeOwned>(arguments: serde_json::Value) -> ToolResult<T> {
    serde_json::from_value(arguments).map_err(|e| ToolError::validation("arguments", e.to_string()))
}
