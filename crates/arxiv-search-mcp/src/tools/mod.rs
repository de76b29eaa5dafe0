//! MCP tool implementations.
//!
//! Each tool:
//! 1. Decodes and validates its arguments
//! 2. Calls the arXiv client
//! 3. Formats results as Markdown or JSON

mod lookup;
mod search;

pub use lookup::GetArxivPaperTool;
pub use search::SearchArxivPapersTool;

use std::sync::Arc;

use crate::client::ArxivClient;
use crate::error::ToolResult;

/// Tool execution context.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// arXiv client.
    pub client: Arc<ArxivClient>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub const fn new(client: Arc<ArxivClient>) -> Self {
        Self { client }
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "search_arxiv_papers").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![Box::new(SearchArxivPapersTool), Box::new(GetArxivPaperTool)]
}
