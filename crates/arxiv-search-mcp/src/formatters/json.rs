//! JSON output formatting.

use serde_json::{Value, json};

use crate::models::{Paper, SearchIntent, SearchResponse};

/// Search results with the interpretation that produced them.
#[must_use]
pub fn search_results_json(
    query: &str,
    intent: &SearchIntent,
    catalog_query: &str,
    response: &SearchResponse,
) -> Value {
    json!({
        "query": query,
        "interpretation": intent,
        "catalogQuery": catalog_query,
        "totalResults": response.total_results,
        "startIndex": response.start_index,
        "itemsPerPage": response.items_per_page,
        "papers": response.papers,
    })
}

/// A looked-up paper, or a not-found marker.
#[must_use]
pub fn paper_lookup_json(arxiv_id: &str, paper: Option<&Paper>) -> Value {
    match paper {
        Some(paper) => json!(paper),
        None => json!({ "found": false, "id": arxiv_id }),
    }
}
