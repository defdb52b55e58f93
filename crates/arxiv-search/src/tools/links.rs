//! Browser tool: arxiv_open.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::ToolResult;
use crate::models::{LinkTarget, OpenInput};

/// Open a paper's landing page or PDF.
pub struct OpenLinkTool;

#[async_trait::async_trait]
impl McpTool for OpenLinkTool {
    fn name(&self) -> &'static str {
        "arxiv_open"
    }

    fn description(&self) -> &'static str {
        "Open an arXiv paper's abstract page or PDF in the default browser."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "arXiv id or abs/pdf URL"
                },
                "target": {
                    "type": "string",
                    "enum": ["page", "pdf"],
                    "default": "page"
                }
            },
            "required": ["id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: OpenInput = serde_json::from_value(input)?;

        let paper = ctx.session.resolve(&ctx.client, &params.id).await?;
        let url = match params.target {
            LinkTarget::Page => paper.abs_url(),
            LinkTarget::Pdf => paper.pdf_link(),
        };
        ctx.browser.open(&url)?;

        tracing::info!(id = paper.arxiv_id(), url = %url, "Opened in browser");
        Ok(format!("Opened {url}"))
    }
}
