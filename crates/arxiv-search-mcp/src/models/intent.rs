//! Structured interpretation of a natural-language query.

use serde::{Deserialize, Serialize};

use crate::config::api;

/// Lower bound on publication date extracted from the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Earliest date of interest, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

/// What a natural-language query asks for.
///
/// Built once by [`crate::query::parse_query`] and consumed by
/// [`crate::query::build_arxiv_query`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIntent {
    /// Residual keywords, deduplicated in first-occurrence order.
    pub search_terms: Vec<String>,

    /// Author names in match order.
    pub authors: Vec<String>,

    /// arXiv category codes in table order; may repeat.
    pub categories: Vec<String>,

    /// Date constraint, if any was recognized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,

    /// Result count requested in the text ("top 5").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
}

impl SearchIntent {
    /// True when no terms, authors or categories were recognized.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.search_terms.is_empty() && self.authors.is_empty() && self.categories.is_empty()
    }

    /// Start date of the recognized range.
    #[must_use]
    pub fn date_start(&self) -> Option<&str> {
        self.date_range.as_ref().and_then(|r| r.start.as_deref())
    }

    /// Page size for the catalog request.
    ///
    /// A count stated in the text wins over the caller's value; it is capped
    /// at the tool limit, and zero counts as not stated.
    #[must_use]
    pub fn effective_max_results(&self, requested: u32) -> u32 {
        self.max_results
            .filter(|n| *n > 0)
            .map(|n| n.min(api::MAX_RESULTS_LIMIT))
            .unwrap_or(requested)
    }
}
