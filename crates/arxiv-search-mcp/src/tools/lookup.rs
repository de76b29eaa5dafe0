//! Single-paper lookup tool: get_arxiv_paper.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::ToolResult;
use crate::formatters;
use crate::models::{GetPaperInput, ResponseFormat};

/// Fetch one paper by arXiv identifier.
pub struct GetArxivPaperTool;

#[async_trait::async_trait]
impl McpTool for GetArxivPaperTool {
    fn name(&self) -> &'static str {
        "get_arxiv_paper"
    }

    fn description(&self) -> &'static str {
        "Get detailed information about a specific arXiv paper by its ID"
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "arxiv_id": {
                    "type": "string",
                    "description": "The arXiv ID of the paper (e.g., \"1706.03762\", \"2301.07041\")"
                },
                "response_format": {
                    "type": "string",
                    "enum": ["markdown", "json"],
                    "default": "markdown"
                }
            },
            "required": ["arxiv_id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params = GetPaperInput::from_arguments(input)?;
        let id = params.id();

        let paper = ctx.client.get_paper_by_id(id).await?;
        if paper.is_none() {
            tracing::info!(arxiv_id = id, "Paper not found");
        }

        match params.response_format {
            ResponseFormat::Markdown => Ok(paper.as_ref().map_or_else(
                || formatters::format_not_found(id),
                formatters::format_paper_details,
            )),
            ResponseFormat::Json => {
                Ok(serde_json::to_string_pretty(&formatters::paper_lookup_json(id, paper.as_ref()))?)
            }
        }
    }
}
