//! Citation tool: arxiv_copy_citation.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::ToolResult;
use crate::formatters;
use crate::models::CitationInput;

/// Copy a paper's citation to the clipboard.
pub struct CopyCitationTool;

#[async_trait::async_trait]
impl McpTool for CopyCitationTool {
    fn name(&self) -> &'static str {
        "arxiv_copy_citation"
    }

    fn description(&self) -> &'static str {
        "Copy a citation for an arXiv paper to the clipboard (BibTeX, RIS or EndNote) \
         and return it."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "arXiv id or abs/pdf URL (e.g., '1706.03762')"
                },
                "format": {
                    "type": "string",
                    "enum": ["bibtex", "ris", "endnote"],
                    "default": "bibtex"
                }
            },
            "required": ["id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: CitationInput = serde_json::from_value(input)?;

        let paper = ctx.session.resolve(&ctx.client, &params.id).await?;
        let citation = formatters::format_citation(&paper, params.format);
        ctx.clipboard.set_text(&citation)?;

        tracing::info!(id = paper.arxiv_id(), format = ?params.format, "Citation copied");
        Ok(citation)
    }
}
