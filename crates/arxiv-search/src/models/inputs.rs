//! Input models for MCP tool parameters.

use serde::{Deserialize, Serialize};

use super::{Category, ExportFormat, LinkTarget, ResponseFormat};

/// Input for the search tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInput {
    /// Free-text search; blank text returns no results without a request.
    #[serde(default)]
    pub query: String,

    /// Subject group to keep.
    #[serde(default)]
    pub category: Category,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

/// Input for citation copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationInput {
    /// arXiv id or abs/pdf URL.
    pub id: String,

    /// Citation format.
    #[serde(default)]
    pub format: ExportFormat,
}

/// Input for opening a paper in the browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenInput {
    /// arXiv id or abs/pdf URL.
    pub id: String,

    /// Landing page or PDF.
    #[serde(default)]
    pub target: LinkTarget,
}

/// Input for PDF download.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadInput {
    /// arXiv id or abs/pdf URL.
    pub id: String,
}
