//! Search tool: arxiv_search.

use chrono::Utc;
use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::ToolResult;
use crate::formatters;
use crate::models::{ResponseFormat, SearchInput};

/// Relevance search with client-side ranking and category filter.
pub struct SearchTool;

#[async_trait::async_trait]
impl McpTool for SearchTool {
    fn name(&self) -> &'static str {
        "arxiv_search"
    }

    fn description(&self) -> &'static str {
        "Search arXiv by free text. Results are ranked by title similarity to the query \
         and filtered by subject category. Send the whole text on every change; an \
         older search still running is cancelled."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search text (e.g., 'attention is all you need'). Blank returns nothing."
                },
                "category": {
                    "type": "string",
                    "enum": [
                        "all", "physics", "mathematics", "computer-science",
                        "quantitative-biology", "quantitative-finance", "statistics",
                        "electrical-engineering", "economics"
                    ],
                    "default": "all"
                },
                "responseFormat": {
                    "type": "string",
                    "enum": ["markdown", "json"],
                    "default": "markdown"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SearchInput = serde_json::from_value(input)?;

        let papers = ctx.session.search(&ctx.client, &params.query, params.category).await?;

        let now = Utc::now();
        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_papers_markdown(&papers, now)),
            ResponseFormat::Json => {
                let compact =
                    papers.iter().map(|p| formatters::compact_paper(p, now)).collect::<Vec<_>>();
                Ok(serde_json::to_string_pretty(&compact)?)
            }
        }
    }
}
