//! Markdown output formatting.

use chrono::{DateTime, Utc};

use crate::models::{DisplayItem, Paper};

/// Format a result list as Markdown.
#[must_use]
pub fn format_papers_markdown(papers: &[Paper], now: DateTime<Utc>) -> String {
    if papers.is_empty() {
        return "No papers found.".to_string();
    }

    let mut output = format!("# Papers ({} results)\n\n", papers.len());

    for (i, paper) in papers.iter().enumerate() {
        output.push_str(&format_paper_markdown(paper, i + 1, now));
        output.push_str("\n---\n\n");
    }

    output
}

/// Format a single paper as Markdown.
#[must_use]
pub fn format_paper_markdown(paper: &Paper, index: usize, now: DateTime<Utc>) -> String {
    let item = DisplayItem::from_paper(paper, now);
    let mut output = String::new();

    output.push_str(&format!("## {}. {}\n\n", index, item.title));

    let mut meta = vec![format!("**Author**: {}", item.primary_author)];
    meta.push(format!("**Published**: {}", item.relative_date));
    if !item.category.is_empty() {
        meta.push(format!("**Category**: {}", item.category));
    }
    output.push_str(&format!("{}\n\n", meta.join(" | ")));

    output.push_str(&format!(
        "**Links**: [arXiv]({}) | [PDF]({})\n\n",
        item.abs_url, item.pdf_url
    ));
    output.push_str(&format!("**Key**: `{}` (id `{}`)\n", item.citation_key, item.id));

    output
}
