//! Search query construction.

use url::Url;

use crate::config::api;

/// A search ready to be sent to the arXiv API.
///
/// Only constructible from non-blank text, so holding one means a request is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    text: String,
    max_results: usize,
}

impl SearchQuery {
    /// Build a query from free text, or `None` if there is nothing to search for.
    ///
    /// `max_results` is clamped to the API page size.
    #[must_use]
    pub fn new(text: &str, max_results: usize) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self { text: text.to_string(), max_results: max_results.clamp(1, api::PAGE_SIZE) })
    }

    /// The trimmed search text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Result cap.
    #[must_use]
    pub const fn max_results(&self) -> usize {
        self.max_results
    }

    /// Query parameters: relevance order, descending, capped.
    #[must_use]
    pub fn params(&self) -> Vec<(String, String)> {
        vec![
            ("search_query".to_string(), format!("all:{}", self.text)),
            ("sortBy".to_string(), "relevance".to_string()),
            ("sortOrder".to_string(), "descending".to_string()),
            ("max_results".to_string(), self.max_results.to_string()),
        ]
    }

    /// Full request URL against `base`.
    ///
    /// # Errors
    ///
    /// Returns error if `base` is not a valid URL.
    pub fn to_url(&self, base: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(base, self.params())
    }
}
