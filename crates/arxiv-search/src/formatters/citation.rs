//! Bibliographic renderings of a single paper.

use crate::models::{ExportFormat, Paper, citation_key};

/// Render `paper` in `format`.
#[must_use]
pub fn format_citation(paper: &Paper, format: ExportFormat) -> String {
    match format {
        ExportFormat::Bibtex => format_bibtex(paper),
        ExportFormat::Ris => format_ris(paper),
        ExportFormat::Endnote => format_endnote(paper),
    }
}

/// Format a paper as a BibTeX `@misc` entry keyed by its citation key.
#[must_use]
pub fn format_bibtex(paper: &Paper) -> String {
    let mut output = format!("@misc{{{},\n", citation_key(paper));

    let authors = if paper.authors.is_empty() {
        "Unknown".to_string()
    } else {
        paper.authors.join(" and ")
    };
    output.push_str(&format!("  author = {{{}}},\n", escape_bibtex(&authors)));
    output.push_str(&format!("  title = {{{}}},\n", escape_bibtex(paper.title_or_default())));

    if let Some(year) = paper.year() {
        output.push_str(&format!("  year = {{{year}}},\n"));
    }

    output.push_str(&format!("  eprint = {{{}}},\n", paper.eprint()));
    output.push_str("  archivePrefix = {arXiv},\n");

    if let Some(category) = &paper.category {
        output.push_str(&format!("  primaryClass = {{{}}},\n", escape_bibtex(category)));
    }

    output.push_str(&format!("  url = {{{}}}\n", paper.abs_url()));
    output.push('}');
    output
}

/// Format a paper as RIS.
#[must_use]
pub fn format_ris(paper: &Paper) -> String {
    let mut output = String::from("TY  - GEN\n");
    output.push_str(&format!("TI  - {}\n", paper.title_or_default()));

    for author in &paper.authors {
        output.push_str(&format!("AU  - {author}\n"));
    }

    if let Some(year) = paper.year() {
        output.push_str(&format!("PY  - {year}\n"));
    }

    if let Some(category) = &paper.category {
        output.push_str(&format!("KW  - {category}\n"));
    }

    output.push_str(&format!("UR  - {}\n", paper.abs_url()));
    output.push_str(&format!("ID  - arXiv:{}\n", paper.eprint()));
    output.push_str("ER  - \n");
    output
}

/// Format a paper as EndNote.
#[must_use]
pub fn format_endnote(paper: &Paper) -> String {
    let mut output = String::from("%0 Electronic Article\n");
    output.push_str(&format!("%T {}\n", paper.title_or_default()));

    for author in &paper.authors {
        output.push_str(&format!("%A {author}\n"));
    }

    if let Some(year) = paper.year() {
        output.push_str(&format!("%D {year}\n"));
    }

    if let Some(category) = &paper.category {
        output.push_str(&format!("%K {category}\n"));
    }

    output.push_str(&format!("%U {}\n", paper.abs_url()));
    output.push_str(&format!("%M arXiv:{}\n", paper.eprint()));
    output
}

/// Escape a string for BibTeX output.
fn escape_bibtex(s: &str) -> String {
    s.replace('\\', "\\textbackslash{}")
        .replace('{', "\\{")
        .replace('}', "\\}")
        .replace('&', "\\&")
        .replace('%', "\\%")
        .replace('$', "\\$")
        .replace('#', "\\#")
        .replace('_', "\\_")
        .replace('^', "\\textasciicircum{}")
        .replace('~', "\\textasciitilde{}")
}
