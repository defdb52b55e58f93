//! Data models for arXiv entities and tool parameters.
//!
//! All models use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` for their JSON shape.

mod category;
mod display;
mod enums;
mod inputs;
mod paper;
mod query;

pub use category::{Category, MatchRule};
pub use display::{
    AUTHOR_PLACEHOLDER, DisplayItem, MULTI_AUTHOR_MARKER, TITLE_PLACEHOLDER, UNKNOWN_AUTHOR,
    YEAR_PLACEHOLDER, citation_key, primary_author, relative_time,
};
pub use enums::{ExportFormat, LinkTarget, ResponseFormat};
pub use inputs::*;
pub use paper::{Paper, normalize_arxiv_id};
pub use query::SearchQuery;
