//! Enumeration types for API and tool parameters.

use serde::{Deserialize, Serialize};

/// Output format for tool responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Human-readable Markdown format.
    #[default]
    Markdown,
    /// Machine-readable JSON format.
    Json,
}

impl ResponseFormat {
    /// Check if this is markdown format.
    #[must_use]
    pub const fn is_markdown(self) -> bool {
        matches!(self, Self::Markdown)
    }

    /// Check if this is JSON format.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Result ordering key understood by the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    /// Catalog relevance ranking.
    #[default]
    #[serde(rename = "relevance")]
    Relevance,
    /// Date of the latest revision.
    #[serde(rename = "lastUpdatedDate")]
    LastUpdated,
    /// Date of first submission.
    #[serde(rename = "submittedDate")]
    Submitted,
}

impl SortBy {
    /// Value of the `sortBy` query parameter.
    #[must_use]
    pub const fn as_api_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::LastUpdated => "lastUpdatedDate",
            Self::Submitted => "submittedDate",
        }
    }
}

/// Result ordering direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest or least relevant first.
    Ascending,
    /// Newest or most relevant first.
    #[default]
    Descending,
}

impl SortOrder {
    /// Value of the `sortOrder` query parameter.
    #[must_use]
    pub const fn as_api_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_format_default() {
        assert_eq!(ResponseFormat::default(), ResponseFormat::Markdown);
        assert!(ResponseFormat::Markdown.is_markdown());
        assert!(!ResponseFormat::Markdown.is_json());
    }

    #[test]
    fn test_sort_defaults() {
        assert_eq!(SortBy::default(), SortBy::Relevance);
        assert_eq!(SortOrder::default(), SortOrder::Descending);
    }

    #[test]
    fn test_sort_by_wire_names() {
        let parsed: SortBy = serde_json::from_str(r#""lastUpdatedDate""#).unwrap();
        assert_eq!(parsed, SortBy::LastUpdated);
        assert_eq!(parsed.as_api_str(), "lastUpdatedDate");
        assert_eq!(SortBy::Submitted.as_api_str(), "submittedDate");

        assert!(serde_json::from_str::<SortBy>(r#""citations""#).is_err());
    }

    #[test]
    fn test_sort_order_wire_names() {
        let parsed: SortOrder = serde_json::from_str(r#""ascending""#).unwrap();
        assert_eq!(parsed, SortOrder::Ascending);
        assert_eq!(SortOrder::Descending.as_api_str(), "descending");
    }
}
