//! Shared fixtures: Atom feed builders, recording desktop fakes and contexts.
#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use wiremock::MockServer;

use arxiv_search::actions::{Browser, Clipboard};
use arxiv_search::client::ArxivClient;
use arxiv_search::config::Config;
use arxiv_search::error::{ToolError, ToolResult};
use arxiv_search::tools::ToolContext;

/// One `<entry>` of an arXiv Atom response.
pub struct Entry<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub authors: &'a [&'a str],
    pub published: &'a str,
    pub category: &'a str,
    pub pdf_base: &'a str,
}

impl Entry<'_> {
    fn to_xml(&self) -> String {
        let authors: String = self
            .authors
            .iter()
            .map(|a| format!("<author><name>{a}</name></author>"))
            .collect();
        format!(
            r#"<entry>
    <id>http://arxiv.org/abs/{id}</id>
    <published>{published}</published>
    <updated>{published}</updated>
    <title>{title}</title>
    <summary>Abstract of {title}.</summary>
    {authors}
    <link href="http://arxiv.org/abs/{id}" rel="alternate" type="text/html"/>
    <link title="pdf" href="{pdf_base}/pdf/{id}" rel="related" type="application/pdf"/>
    <arxiv:primary_category xmlns:arxiv="http://arxiv.org/schemas/atom" term="{category}" scheme="http://arxiv.org/schemas/atom"/>
    <category term="{category}" scheme="http://arxiv.org/schemas/atom"/>
  </entry>"#,
            id = self.id,
            published = self.published,
            title = self.title,
            category = self.category,
            pdf_base = self.pdf_base,
        )
    }
}

/// Wrap entries in an Atom feed document.
pub fn feed(entries: &[Entry<'_>]) -> String {
    let body: String = entries.iter().map(Entry::to_xml).collect::<Vec<_>>().join("\n  ");
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query</title>
  <id>http://arxiv.org/api/test</id>
  {body}
</feed>"#
    )
}

/// The canonical transformer paper, with its PDF served from `pdf_base`.
pub fn attention(pdf_base: &str) -> Entry<'_> {
    Entry {
        id: "1706.03762v7",
        title: "Attention Is All You Need",
        authors: &["Ashish Vaswani", "Noam Shazeer"],
        published: "2017-06-12T17:57:34Z",
        category: "cs.CL",
        pdf_base,
    }
}

/// A second, less similar computer science paper.
pub fn transformers_survey(pdf_base: &str) -> Entry<'_> {
    Entry {
        id: "2106.04554v2",
        title: "A Survey of Transformers",
        authors: &["Tianyang Lin"],
        published: "2021-06-08T12:00:00Z",
        category: "cs.LG",
        pdf_base,
    }
}

/// A mathematics paper.
pub fn attention_math(pdf_base: &str) -> Entry<'_> {
    Entry {
        id: "2301.00001v1",
        title: "Attention Operators on Hilbert Spaces",
        authors: &["Emmy Noether"],
        published: "2023-01-01T00:00:00Z",
        category: "math.FA",
        pdf_base,
    }
}

/// Clipboard that records what was written.
#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn last(&self) -> Option<String> {
        self.writes.lock().unwrap().last().cloned()
    }
}

impl Clipboard for RecordingClipboard {
    fn set_text(&self, text: &str) -> ToolResult<()> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Clipboard that is never available (headless session).
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn set_text(&self, _text: &str) -> ToolResult<()> {
        Err(ToolError::unavailable("clipboard: no display"))
    }
}

/// Browser that records the URLs it was asked to open.
#[derive(Default)]
pub struct RecordingBrowser {
    pub opened: Mutex<Vec<String>>,
}

impl Browser for RecordingBrowser {
    fn open(&self, url: &str) -> ToolResult<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Client pointed at the mock server.
pub fn test_client(mock_server: &MockServer, download_dir: &Path) -> ArxivClient {
    let config = Config::for_testing(&mock_server.uri(), download_dir);
    ArxivClient::new(&config).unwrap()
}

/// Tool context with recording desktop fakes.
pub fn test_context(
    mock_server: &MockServer,
    download_dir: &Path,
) -> (ToolContext, Arc<RecordingClipboard>, Arc<RecordingBrowser>) {
    let config = Config::for_testing(&mock_server.uri(), download_dir);
    let client = Arc::new(ArxivClient::new(&config).unwrap());
    let clipboard = Arc::new(RecordingClipboard::default());
    let browser = Arc::new(RecordingBrowser::default());
    let ctx = ToolContext::new(client, &config).with_desktop(clipboard.clone(), browser.clone());
    (ctx, clipboard, browser)
}
