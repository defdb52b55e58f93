//! Presentation fields derived from a [`Paper`].
//!
//! Everything here is a pure function of the paper (and, for dates, of the
//! caller's notion of "now"). Missing source fields fall back to fixed
//! placeholders instead of failing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Paper;

/// Citation key part used when there is no usable first author.
pub const AUTHOR_PLACEHOLDER: &str = "anonymous";

/// Citation key part used when the publication year is unknown.
pub const YEAR_PLACEHOLDER: &str = "0000";

/// Citation key part used when the title has no usable word.
pub const TITLE_PLACEHOLDER: &str = "untitled";

/// Primary author label used when the author list is empty.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Appended to the primary author when there are co-authors.
pub const MULTI_AUTHOR_MARKER: &str = " et al.";

/// Words skipped when picking the title token of a citation key.
const STOPWORDS: &[&str] = &[
    "a", "about", "all", "an", "and", "are", "as", "at", "be", "between", "by", "can", "do",
    "does", "for", "from", "how", "in", "into", "is", "it", "its", "need", "no", "not", "of",
    "on", "onto", "or", "our", "over", "that", "the", "these", "this", "those", "through", "to",
    "toward", "towards", "under", "using", "via", "was", "we", "were", "what", "when", "where",
    "which", "who", "why", "with", "without", "you", "your",
];

/// One row of a result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayItem {
    /// Versioned arXiv id.
    pub id: String,
    /// Title or "Untitled".
    pub title: String,
    /// First author with multi-author marker.
    pub primary_author: String,
    /// Primary taxonomy path, empty if unknown.
    pub category: String,
    /// Age of the paper relative to render time.
    pub relative_date: String,
    /// Short author-year-title key.
    pub citation_key: String,
    /// Landing page.
    pub abs_url: String,
    /// PDF link.
    pub pdf_url: String,
}

impl DisplayItem {
    /// Derive the display row for `paper` as seen at `now`.
    #[must_use]
    pub fn from_paper(paper: &Paper, now: DateTime<Utc>) -> Self {
        Self {
            id: paper.arxiv_id().to_string(),
            title: paper.title_or_default().to_string(),
            primary_author: primary_author(paper),
            category: paper.category.clone().unwrap_or_default(),
            relative_date: relative_time(paper.published, now),
            citation_key: citation_key(paper),
            abs_url: paper.abs_url(),
            pdf_url: paper.pdf_link(),
        }
    }
}

/// Short citation key: `<last name><year><first title word>`, lowercased.
///
/// `Attention Is All You Need` by Ashish Vaswani (2017) gives `vaswani2017attention`.
#[must_use]
pub fn citation_key(paper: &Paper) -> String {
    let author = paper
        .first_author()
        .map(last_name)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| AUTHOR_PLACEHOLDER.to_string());

    let year = paper
        .year()
        .filter(|y| (0..=9999).contains(y))
        .map_or_else(|| YEAR_PLACEHOLDER.to_string(), |y| format!("{y:04}"));

    let word = paper
        .title
        .as_deref()
        .and_then(first_significant_word)
        .unwrap_or_else(|| TITLE_PLACEHOLDER.to_string());

    format!("{author}{year}{word}")
}

/// First author, suffixed with the multi-author marker when others follow.
#[must_use]
pub fn primary_author(paper: &Paper) -> String {
    match paper.first_author() {
        Some(first) if paper.authors.len() > 1 => format!("{first}{MULTI_AUTHOR_MARKER}"),
        Some(first) => first.to_string(),
        None => UNKNOWN_AUTHOR.to_string(),
    }
}

/// Human age of a timestamp relative to `now` ("3 days ago").
#[must_use]
pub fn relative_time(published: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(published) = published else {
        return "unknown date".to_string();
    };

    let elapsed = now.signed_duration_since(published);
    let seconds = elapsed.num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 60 {
        ago(minutes, "minute")
    } else if hours < 24 {
        ago(hours, "hour")
    } else if days < 30 {
        ago(days, "day")
    } else if days < 365 {
        ago((days / 30).clamp(1, 11), "month")
    } else {
        ago(days / 365, "year")
    }
}

fn ago(n: i64, unit: &str) -> String {
    if n == 1 { format!("1 {unit} ago") } else { format!("{n} {unit}s ago") }
}

/// Family name, accepting both "Given Family" and "Family, Given".
fn last_name(author: &str) -> String {
    let family = match author.split_once(',') {
        Some((family, _)) => family,
        None => author.split_whitespace().last().unwrap_or(""),
    };
    fold(family)
}

fn first_significant_word(title: &str) -> Option<String> {
    title
        .split(|c: char| !c.is_alphanumeric())
        .map(fold)
        .find(|w| !w.is_empty() && !STOPWORDS.contains(&w.as_str()))
}

/// Lowercase and keep only alphanumerics, so the key is safe as a file name.
fn fold(s: &str) -> String {
    s.chars().filter(|c| c.is_alphanumeric()).flat_map(char::to_lowercase).collect()
}
