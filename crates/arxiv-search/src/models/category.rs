//! Subject groups a search can be narrowed to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a category decides whether a paper passes the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// No restriction.
    Unrestricted,
    /// Any physics archive. arXiv physics spans many archives (astro-ph,
    /// cond-mat, hep-*, quant-ph, ...) so this admits every paper.
    AnyPhysics,
    /// Taxonomy path must contain this archive name, so `math` keeps
    /// `math.GT` and `math-ph` alike.
    Archive(&'static str),
}

impl MatchRule {
    /// Whether a paper with the given taxonomy path passes.
    #[must_use]
    pub fn admits(self, category: Option<&str>) -> bool {
        match self {
            Self::Unrestricted | Self::AnyPhysics => true,
            Self::Archive(prefix) => category.is_some_and(|c| c.contains(prefix)),
        }
    }
}

/// Top-level arXiv subject group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Every subject.
    #[default]
    All,
    /// Physics, all archives.
    Physics,
    /// Mathematics.
    #[serde(alias = "math")]
    Mathematics,
    /// Computer Science.
    #[serde(alias = "cs")]
    ComputerScience,
    /// Quantitative Biology.
    #[serde(alias = "q-bio")]
    QuantitativeBiology,
    /// Quantitative Finance.
    #[serde(alias = "q-fin")]
    QuantitativeFinance,
    /// Statistics.
    #[serde(alias = "stat")]
    Statistics,
    /// Electrical Engineering and Systems Science.
    #[serde(alias = "eess")]
    ElectricalEngineering,
    /// Economics.
    #[serde(alias = "econ")]
    Economics,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 9] = [
        Self::All,
        Self::Physics,
        Self::Mathematics,
        Self::ComputerScience,
        Self::QuantitativeBiology,
        Self::QuantitativeFinance,
        Self::Statistics,
        Self::ElectricalEngineering,
        Self::Economics,
    ];

    /// Matching rule for this category.
    #[must_use]
    pub const fn rule(self) -> MatchRule {
        match self {
            Self::All => MatchRule::Unrestricted,
            Self::Physics => MatchRule::AnyPhysics,
            Self::Mathematics => MatchRule::Archive("math"),
            Self::ComputerScience => MatchRule::Archive("cs"),
            Self::QuantitativeBiology => MatchRule::Archive("q-bio"),
            Self::QuantitativeFinance => MatchRule::Archive("q-fin"),
            Self::Statistics => MatchRule::Archive("stat"),
            Self::ElectricalEngineering => MatchRule::Archive("eess"),
            Self::Economics => MatchRule::Archive("econ"),
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Physics => "Physics",
            Self::Mathematics => "Mathematics",
            Self::ComputerScience => "Computer Science",
            Self::QuantitativeBiology => "Quantitative Biology",
            Self::QuantitativeFinance => "Quantitative Finance",
            Self::Statistics => "Statistics",
            Self::ElectricalEngineering => "Electrical Engineering and Systems Science",
            Self::Economics => "Economics",
        }
    }

    /// Stable machine name, accepted back by `FromStr`.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Physics => "physics",
            Self::Mathematics => "mathematics",
            Self::ComputerScience => "computer-science",
            Self::QuantitativeBiology => "quantitative-biology",
            Self::QuantitativeFinance => "quantitative-finance",
            Self::Statistics => "statistics",
            Self::ElectricalEngineering => "electrical-engineering",
            Self::Economics => "economics",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| {
                c.slug() == wanted
                    || c.label().eq_ignore_ascii_case(&wanted)
                    || matches!(c.rule(), MatchRule::Archive(p) if p == wanted)
            })
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}
