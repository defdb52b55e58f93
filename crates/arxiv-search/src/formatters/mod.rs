//! Output formatters for Markdown, JSON and citations.

mod citation;
mod json;
mod markdown;

pub use self::json::*;
pub use citation::*;
pub use markdown::*;
