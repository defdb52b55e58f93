//! JSON output formatting.

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

use crate::models::{DisplayItem, Paper};

/// Compact representation of one shown paper.
#[must_use]
pub fn compact_paper(paper: &Paper, now: DateTime<Utc>) -> Value {
    let item = DisplayItem::from_paper(paper, now);
    let mut obj = json!({
        "id": item.id,
        "title": item.title,
        "author": item.primary_author,
        "date": item.relative_date,
        "citationKey": item.citation_key,
        "url": item.abs_url,
        "pdf": item.pdf_url,
    });

    if !item.category.is_empty() {
        obj["category"] = json!(item.category);
    }

    if let Some(published) = paper.published {
        obj["published"] = json!(published.to_rfc3339());
    }

    obj
}
