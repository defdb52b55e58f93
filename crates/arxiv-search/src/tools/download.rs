//! Download tool: arxiv_download_pdf.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::actions;
use crate::error::ToolResult;
use crate::models::DownloadInput;

/// Save a paper's PDF under the configured download directory.
pub struct DownloadPdfTool;

#[async_trait::async_trait]
impl McpTool for DownloadPdfTool {
    fn name(&self) -> &'static str {
        "arxiv_download_pdf"
    }

    fn description(&self) -> &'static str {
        "Download an arXiv paper's PDF to the configured directory as <citation key>.pdf. \
         The BibTeX citation is copied to the clipboard first."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "arXiv id or abs/pdf URL"
                }
            },
            "required": ["id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: DownloadInput = serde_json::from_value(input)?;

        let paper = ctx.session.resolve(&ctx.client, &params.id).await?;
        let path =
            actions::download_pdf(&ctx.client, ctx.clipboard.as_ref(), &paper, &ctx.download_dir)
                .await?;

        Ok(format!("Downloaded to {}", path.display()))
    }
}
