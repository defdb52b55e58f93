//! MCP tool implementations.
//!
//! Each tool:
//! 1. Parses and validates input parameters
//! 2. Runs the search or action through the shared context
//! 3. Formats the result as Markdown, JSON or plain text

mod download;
mod export;
mod links;
mod search;

pub use download::DownloadPdfTool;
pub use export::CopyCitationTool;
pub use links::OpenLinkTool;
pub use search::SearchTool;

use std::path::PathBuf;
use std::sync::Arc;

use crate::actions::{Browser, Clipboard, SystemBrowser, SystemClipboard};
use crate::client::ArxivClient;
use crate::config::Config;
use crate::error::ToolResult;
use crate::session::SearchSession;

/// Tool execution context.
pub struct ToolContext {
    /// API client.
    pub client: Arc<ArxivClient>,

    /// Current search state.
    pub session: Arc<SearchSession>,

    /// Clipboard used by citation actions.
    pub clipboard: Arc<dyn Clipboard>,

    /// Browser used by open actions.
    pub browser: Arc<dyn Browser>,

    /// Base directory for downloaded PDFs.
    pub download_dir: PathBuf,
}

impl ToolContext {
    /// Create a context backed by the system clipboard and browser.
    #[must_use]
    pub fn new(client: Arc<ArxivClient>, config: &Config) -> Self {
        Self {
            client,
            session: Arc::new(SearchSession::new(config.max_results)),
            clipboard: Arc::new(SystemClipboard),
            browser: Arc::new(SystemBrowser),
            download_dir: config.download_dir.clone(),
        }
    }

    /// Replace the desktop services.
    #[must_use]
    pub fn with_desktop(mut self, clipboard: Arc<dyn Clipboard>, browser: Arc<dyn Browser>) -> Self {
        self.clipboard = clipboard;
        self.browser = browser;
        self
    }
}

impl std::fmt::Debug for ToolContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolContext")
            .field("client", &self.client)
            .field("download_dir", &self.download_dir)
            .finish()
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "arxiv_search").
    fn name(&self) -> &'static str;

    /// Tool description for the client.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(search::SearchTool),
        Box::new(export::CopyCitationTool),
        Box::new(links::OpenLinkTool),
        Box::new(download::DownloadPdfTool),
    ]
}
