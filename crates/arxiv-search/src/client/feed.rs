//! Atom feed parsing for arXiv query responses.

use chrono::{DateTime, Utc};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::models::Paper;

/// Parse an arXiv Atom response into papers, in document order.
///
/// A malformed or empty document yields no papers; the failure is logged only.
#[must_use]
pub fn parse_feed(body: &str) -> Vec<Paper> {
    match try_parse_feed(body) {
        Ok(papers) => papers,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed arXiv feed, treating as empty");
            Vec::new()
        }
    }
}

/// Element whose text content is being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Id,
    Title,
    Summary,
    Published,
    Updated,
    AuthorName,
}

impl Field {
    fn from_local_name(name: &[u8], in_author: bool) -> Option<Self> {
        match name {
            b"id" => Some(Self::Id),
            b"title" => Some(Self::Title),
            b"summary" => Some(Self::Summary),
            b"published" => Some(Self::Published),
            b"updated" => Some(Self::Updated),
            b"name" if in_author => Some(Self::AuthorName),
            _ => None,
        }
    }
}

#[derive(Default)]
struct EntryState {
    paper: Paper,
    in_author: bool,
    field: Option<Field>,
    text: String,
}

impl EntryState {
    fn start(&mut self, e: &BytesStart<'_>) {
        match e.local_name().as_ref() {
            b"author" => self.in_author = true,
            b"link" => self.link(e),
            b"category" => {
                if let Some(term) = attr(e, b"term") {
                    self.paper.categories.push(term);
                }
            }
            b"primary_category" => self.paper.category = attr(e, b"term"),
            name => {
                self.field = Field::from_local_name(name, self.in_author);
                self.text.clear();
            }
        }
    }

    fn link(&mut self, e: &BytesStart<'_>) {
        let is_pdf = attr(e, b"title").as_deref() == Some("pdf")
            || attr(e, b"type").as_deref() == Some("application/pdf");
        if is_pdf {
            self.paper.pdf_url = attr(e, b"href");
        }
    }

    fn end(&mut self, name: &[u8]) {
        if name == b"author" {
            self.in_author = false;
            return;
        }

        let Some(field) = self.field else { return };
        if Field::from_local_name(name, self.in_author) != Some(field) {
            return;
        }

        let value = collapse_whitespace(&self.text);
        self.text.clear();
        self.field = None;
        if value.is_empty() {
            return;
        }

        match field {
            Field::Id => self.paper.id = value,
            Field::Title => self.paper.title = Some(value),
            Field::Summary => self.paper.summary = Some(value),
            Field::Published => self.paper.published = parse_timestamp(&value),
            Field::Updated => self.paper.updated = parse_timestamp(&value),
            Field::AuthorName => self.paper.authors.push(value),
        }
    }

    fn finish(self) -> Option<Paper> {
        let mut paper = self.paper;
        // The API reports query errors as a pseudo-entry.
        if paper.id.contains("/api/errors") {
            tracing::warn!(
                detail = paper.summary.as_deref().unwrap_or_default(),
                "arXiv API returned an error entry"
            );
            return None;
        }
        if paper.category.is_none() {
            paper.category = paper.categories.first().cloned();
        }
        Some(paper)
    }
}

fn try_parse_feed(body: &str) -> Result<Vec<Paper>, quick_xml::Error> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut papers = Vec::new();
    let mut entry: Option<EntryState> = None;

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(e) => {
                if e.local_name().as_ref() == b"entry" {
                    entry = Some(EntryState::default());
                } else if let Some(state) = entry.as_mut() {
                    state.start(&e);
                }
            }
            Event::Empty(e) => {
                if let Some(state) = entry.as_mut() {
                    state.start(&e);
                    state.end(e.local_name().as_ref());
                }
            }
            Event::Text(t) => {
                if let Some(state) = entry.as_mut().filter(|s| s.field.is_some()) {
                    state.text.push_str(&t.unescape()?);
                    state.text.push(' ');
                }
            }
            Event::CData(c) => {
                if let Some(state) = entry.as_mut().filter(|s| s.field.is_some()) {
                    state.text.push_str(&String::from_utf8_lossy(&c));
                    state.text.push(' ');
                }
            }
            Event::End(e) => {
                let local = e.local_name();
                if local.as_ref() == b"entry" {
                    if let Some(paper) = entry.take().and_then(EntryState::finish) {
                        papers.push(paper);
                    }
                } else if let Some(state) = entry.as_mut() {
                    state.end(local.as_ref());
                }
            }
            _ => {}
        }
    }

    Ok(papers)
}

fn attr(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == key)
        .and_then(|a| a.unescape_value().ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value).ok().map(|d| d.with_timezone(&Utc))
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
