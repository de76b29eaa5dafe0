//! Natural-language search tool: search_arxiv_papers.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::config::api;
use crate::error::ToolResult;
use crate::formatters;
use crate::models::{ResponseFormat, SearchParams, SearchPapersInput};
use crate::query::{build_arxiv_query, parse_query};

/// Free-text search over the arXiv catalog.
pub struct SearchArxivPapersTool;

#[async_trait::async_trait]
impl McpTool for SearchArxivPapersTool {
    fn name(&self) -> &'static str {
        "search_arxiv_papers"
    }

    fn description(&self) -> &'static str {
        "Search for academic papers on arXiv using natural language queries. \
         You can search by keywords, authors, categories, or date ranges."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Natural language description of what papers to search for. \
                        Examples: \"machine learning papers by Geoffrey Hinton\", \
                        \"recent deep learning research\", \"quantum computing papers from 2023\""
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of papers to return (default: 10, max: 50)",
                    "minimum": 1,
                    "maximum": api::MAX_RESULTS_LIMIT,
                    "default": api::DEFAULT_MAX_RESULTS
                },
                "start": {
                    "type": "integer",
                    "description": "Offset of the first result, for paging",
                    "minimum": 0,
                    "default": 0
                },
                "sort_by": {
                    "type": "string",
                    "description": "How to sort the results",
                    "enum": ["relevance", "lastUpdatedDate", "submittedDate"],
                    "default": "relevance"
                },
                "sort_order": {
                    "type": "string",
                    "description": "Sort order for results",
                    "enum": ["ascending", "descending"],
                    "default": "descending"
                },
                "response_format": {
                    "type": "string",
                    "enum": ["markdown", "json"],
                    "default": "markdown"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params = SearchPapersInput::from_arguments(input)?;

        let intent = parse_query(&params.query);
        let catalog_query = build_arxiv_query(&intent);

        if let Some(since) = intent.date_start() {
            tracing::debug!(since, "Date range recognized but not sent to the catalog");
        }

        let search = SearchParams::new(catalog_query.clone())
            .with_max_results(intent.effective_max_results(params.page_size()))
            .with_start(params.offset())
            .with_sort(params.sort_by, params.sort_order);

        tracing::info!(
            query = %params.query,
            catalog_query = %catalog_query,
            max_results = search.max_results,
            "Searching arXiv"
        );

        let response = ctx.client.search_papers(&search).await?;

        match params.response_format {
            ResponseFormat::Markdown => {
                Ok(formatters::format_search_results(&params.query, &response))
            }
            ResponseFormat::Json => Ok(serde_json::to_string_pretty(
                &formatters::search_results_json(&params.query, &intent, &catalog_query, &response),
            )?),
        }
    }
}
