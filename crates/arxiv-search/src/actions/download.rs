//! PDF download action.

use std::path::{Path, PathBuf};

use crate::client::ArxivClient;
use crate::error::ToolResult;
use crate::formatters;
use crate::models::{Paper, citation_key};

use super::Clipboard;

/// Where the PDF of `paper` is stored under `base_dir`: `<base_dir>/<citation key>.pdf`.
#[must_use]
pub fn pdf_path(base_dir: &Path, paper: &Paper) -> PathBuf {
    base_dir.join(format!("{}.pdf", citation_key(paper)))
}

/// Copy the citation, fetch the PDF in one request and write it under `base_dir`.
///
/// The clipboard write is best effort. Network and file-system failures are
/// returned as-is: nothing is retried and a partial file is not removed.
///
/// # Errors
///
/// Returns error if the PDF cannot be fetched or written.
pub async fn download_pdf(
    client: &ArxivClient,
    clipboard: &dyn Clipboard,
    paper: &Paper,
    base_dir: &Path,
) -> ToolResult<PathBuf> {
    let citation = formatters::format_bibtex(paper);
    if let Err(e) = clipboard.set_text(&citation) {
        tracing::warn!(error = %e, "Could not copy citation before download");
    }

    let url = paper.pdf_link();
    let target = pdf_path(base_dir, paper);
    tracing::info!(id = paper.arxiv_id(), url = %url, "Downloading PDF...");

    let bytes = client.fetch_bytes(&url).await?;
    tokio::fs::create_dir_all(base_dir).await?;
    tokio::fs::write(&target, &bytes).await?;

    tracing::info!(path = %target.display(), bytes = bytes.len(), "PDF downloaded");
    Ok(target)
}
