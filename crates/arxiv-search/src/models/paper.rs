//! Paper record parsed from an arXiv Atom entry.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::api;

static VERSION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v\d+$").expect("valid version regex"));

/// A paper from the arXiv search API.
///
/// Immutable once parsed; everything shown to the user is derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Entry identifier, the abstract page URL (e.g. `http://arxiv.org/abs/1706.03762v7`).
    pub id: String,

    /// Paper title, whitespace collapsed.
    #[serde(default)]
    pub title: Option<String>,

    /// Abstract.
    #[serde(default)]
    pub summary: Option<String>,

    /// Author names in listed order.
    #[serde(default)]
    pub authors: Vec<String>,

    /// First submission timestamp.
    #[serde(default)]
    pub published: Option<DateTime<Utc>>,

    /// Latest revision timestamp.
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,

    /// Primary taxonomy path (e.g. `cs.CL`).
    #[serde(default)]
    pub category: Option<String>,

    /// Every category term attached to the entry.
    #[serde(default)]
    pub categories: Vec<String>,

    /// Direct PDF link from the feed.
    #[serde(default)]
    pub pdf_url: Option<String>,
}

impl Paper {
    /// Get the paper title, falling back to "Untitled" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().filter(|t| !t.is_empty()).unwrap_or("Untitled")
    }

    /// Versioned arXiv id taken from the identifier URL (e.g. `1706.03762v7`).
    #[must_use]
    pub fn arxiv_id(&self) -> &str {
        self.id
            .rfind("/abs/")
            .map_or(self.id.as_str(), |i| &self.id[i + "/abs/".len()..])
            .trim_matches('/')
    }

    /// arXiv id without version suffix, as used in `eprint` fields.
    #[must_use]
    pub fn eprint(&self) -> String {
        VERSION_SUFFIX.replace(self.arxiv_id(), "").into_owned()
    }

    /// Landing page URL.
    #[must_use]
    pub fn abs_url(&self) -> String {
        if self.id.starts_with("http") {
            self.id.clone()
        } else {
            format!("{}/{}", api::ABS_BASE, self.arxiv_id())
        }
    }

    /// PDF link, derived from the id when the feed omitted it.
    #[must_use]
    pub fn pdf_link(&self) -> String {
        self.pdf_url
            .clone()
            .unwrap_or_else(|| format!("{}/{}", api::PDF_BASE, self.arxiv_id()))
    }

    /// Publication year if the timestamp is known.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.published.map(|p| p.year())
    }

    /// Get the first author's name if available.
    #[must_use]
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str).filter(|a| !a.trim().is_empty())
    }

    /// Whether this paper is the one named by `id` (any accepted id form).
    #[must_use]
    pub fn matches_id(&self, id: &str) -> bool {
        let wanted = normalize_arxiv_id(id);
        !wanted.is_empty() && self.eprint() == wanted
    }
}

/// Reduce an arXiv id, `arXiv:` reference, or abs/pdf URL to the bare unversioned id.
///
/// `https://arxiv.org/pdf/1706.03762v7.pdf` and `arXiv:1706.03762` both give `1706.03762`.
#[must_use]
pub fn normalize_arxiv_id(input: &str) -> String {
    let mut s = input.trim();
    for prefix in ["arXiv:", "arxiv:"] {
        if let Some(rest) = s.strip_prefix(prefix) {
            s = rest.trim_start();
        }
    }
    for marker in ["/abs/", "/pdf/"] {
        if let Some(i) = s.find(marker) {
            s = &s[i + marker.len()..];
        }
    }
    let s = s.split(['?', '#']).next().unwrap_or(s);
    let s = s.trim_matches('/');
    let s = s.strip_suffix(".pdf").unwrap_or(s);
    VERSION_SUFFIX.replace(s, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn attention() -> Paper {
        Paper {
            id: "http://arxiv.org/abs/1706.03762v7".to_string(),
            title: Some("Attention Is All You Need".to_string()),
            authors: vec!["Ashish Vaswani".to_string(), "Noam Shazeer".to_string()],
            published: Some(Utc.with_ymd_and_hms(2017, 6, 12, 17, 57, 34).unwrap()),
            category: Some("cs.CL".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_ids() {
        let paper = attention();
        assert_eq!(paper.arxiv_id(), "1706.03762v7");
        assert_eq!(paper.eprint(), "1706.03762");
        assert_eq!(paper.abs_url(), "http://arxiv.org/abs/1706.03762v7");
        assert_eq!(paper.pdf_link(), "https://arxiv.org/pdf/1706.03762v7");
    }

    #[test]
    fn test_accessors() {
        let paper = attention();
        assert_eq!(paper.year(), Some(2017));
        assert_eq!(paper.first_author(), Some("Ashish Vaswani"));
        assert_eq!(Paper::default().title_or_default(), "Untitled");
    }

    #[test]
    fn test_normalize_arxiv_id() {
        assert_eq!(normalize_arxiv_id("1706.03762"), "1706.03762");
        assert_eq!(normalize_arxiv_id("arXiv:1706.03762v2"), "1706.03762");
        assert_eq!(normalize_arxiv_id("https://arxiv.org/pdf/1706.03762v7.pdf"), "1706.03762");
        assert_eq!(normalize_arxiv_id("http://arxiv.org/abs/hep-th/9901001v1"), "hep-th/9901001");
        assert_eq!(normalize_arxiv_id("  "), "");
    }

    #[test]
    fn test_matches_id() {
        let paper = attention();
        assert!(paper.matches_id("1706.03762"));
        assert!(paper.matches_id("https://arxiv.org/abs/1706.03762v1"));
        assert!(!paper.matches_id("1706.0376"));
        assert!(!paper.matches_id(""));
    }
}
