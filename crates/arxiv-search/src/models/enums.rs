//! Enumeration types for tool parameters.

use serde::{Deserialize, Serialize};

/// Output format for tool responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Human-readable Markdown format.
    #[default]
    Markdown,
    /// Machine-readable JSON format.
    Json,
}

/// Citation format for the clipboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// BibTeX entry.
    #[default]
    Bibtex,
    /// Research Information Systems format.
    Ris,
    /// EndNote format.
    Endnote,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bibtex" | "bib" => Ok(Self::Bibtex),
            "ris" => Ok(Self::Ris),
            "endnote" | "enw" => Ok(Self::Endnote),
            other => Err(format!("unknown citation format '{other}' (bibtex, ris, endnote)")),
        }
    }
}

/// Which page of a paper to open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkTarget {
    /// Abstract landing page.
    #[default]
    Page,
    /// PDF.
    Pdf,
}
