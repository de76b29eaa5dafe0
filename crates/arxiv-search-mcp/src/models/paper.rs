//! Normalized paper records and catalog request/response shapes.

use serde::{Deserialize, Serialize};

use super::{SortBy, SortOrder};
use crate::config::api;

/// One catalog entry, flattened from the Atom feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Bare arXiv identifier without version suffix (e.g. "2301.07041").
    pub id: String,

    /// Title with whitespace runs collapsed.
    pub title: String,

    /// Author display names in listed order.
    pub authors: Vec<String>,

    /// Abstract with whitespace runs collapsed.
    pub r#abstract: String,

    /// First submission timestamp, ISO-8601.
    pub published_date: String,

    /// Latest revision timestamp; equals `published_date` if the feed omits it.
    pub updated_date: String,

    /// Category codes in listed order.
    pub categories: Vec<String>,

    /// PDF link.
    pub pdf_url: String,

    /// Abstract page link.
    pub arxiv_url: String,

    /// Primary category code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_category: Option<String>,

    /// Publisher DOI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    /// Journal reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_ref: Option<String>,

    /// Author comment (page counts, venues, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Paper {
    /// Authors joined with commas, or "Unknown authors".
    #[must_use]
    pub fn author_names(&self) -> String {
        if self.authors.is_empty() {
            "Unknown authors".to_string()
        } else {
            self.authors.join(", ")
        }
    }

    /// Categories joined with commas, or "No categories".
    #[must_use]
    pub fn category_list(&self) -> String {
        if self.categories.is_empty() {
            "No categories".to_string()
        } else {
            self.categories.join(", ")
        }
    }

    /// Date part of `published_date`.
    #[must_use]
    pub fn published_day(&self) -> &str {
        date_only(&self.published_date)
    }

    /// Date part of `updated_date`.
    #[must_use]
    pub fn updated_day(&self) -> &str {
        date_only(&self.updated_date)
    }
}

fn date_only(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// One page of catalog results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Papers in catalog order.
    pub papers: Vec<Paper>,

    /// Total matches reported by the catalog.
    pub total_results: u64,

    /// Offset of the first returned paper.
    pub start_index: u64,

    /// Page size reported by the catalog.
    pub items_per_page: u64,
}

impl SearchResponse {
    /// Check if the page holds no papers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }
}

/// A catalog request: query expression plus paging and ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Catalog query expression (e.g. `all:neural AND networks`).
    pub query: String,

    /// Offset of the first result.
    pub start: u32,

    /// Page size.
    pub max_results: u32,

    /// Ordering key; catalog default when absent.
    pub sort_by: Option<SortBy>,

    /// Ordering direction; catalog default when absent.
    pub sort_order: Option<SortOrder>,
}

impl SearchParams {
    /// Request the first page with the default page size.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            start: 0,
            max_results: api::DEFAULT_MAX_RESULTS,
            sort_by: None,
            sort_order: None,
        }
    }

    /// Set the page size.
    #[must_use]
    pub const fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the offset of the first result.
    #[must_use]
    pub const fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Set the ordering.
    #[must_use]
    pub const fn with_sort(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = Some(sort_by);
        self.sort_order = Some(sort_order);
        self
    }

    /// Query-string pairs in the order the catalog documents them.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("search_query", self.query.clone()),
            ("start", self.start.to_string()),
            ("max_results", self.max_results.to_string()),
        ];

        if let Some(sort_by) = self.sort_by {
            pairs.push(("sortBy", sort_by.as_api_str().to_string()));
        }
        if let Some(sort_order) = self.sort_order {
            pairs.push(("sortOrder", sort_order.as_api_str().to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_display_helpers() {
        let paper = Paper {
            published_date: "2017-06-12T17:57:34Z".into(),
            updated_date: "2023-08-02T00:41:18Z".into(),
            ..Default::default()
        };
        assert_eq!(paper.author_names(), "Unknown authors");
        assert_eq!(paper.category_list(), "No categories");
        assert_eq!(paper.published_day(), "2017-06-12");
        assert_eq!(paper.updated_day(), "2023-08-02");
    }

    #[test]
    fn test_search_params_defaults() {
        let params = SearchParams::new("all:graph");
        let pairs = params.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("search_query", "all:graph".to_string()),
                ("start", "0".to_string()),
                ("max_results", "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_params_with_sort() {
        let params = SearchParams::new("id:1706.03762")
            .with_max_results(1)
            .with_start(20)
            .with_sort(SortBy::Submitted, SortOrder::Ascending);
        let pairs = params.query_pairs();
        assert!(pairs.contains(&("start", "20".to_string())));
        assert!(pairs.contains(&("max_results", "1".to_string())));
        assert!(pairs.contains(&("sortBy", "submittedDate".to_string())));
        assert!(pairs.contains(&("sortOrder", "ascending".to_string())));
    }

    #[test]
    fn test_paper_serializes_camel_case() {
        let paper = Paper { id: "2301.07041".into(), ..Default::default() };
        let json = serde_json::to_value(&paper).unwrap();
        assert_eq!(json["id"], "2301.07041");
        assert!(json.get("publishedDate").is_some());
        assert!(json.get("pdfUrl").is_some());
        assert!(json.get("doi").is_none());
    }
}
