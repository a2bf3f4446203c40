//! ExpertiseArea - the fixed catalog of topics a writer can self-select.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Category tag a writer picks during profile setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpertiseArea {
    Technology,
    Business,
    Health,
    Finance,
    Education,
    Entertainment,
    Lifestyle,
    Science,
    Politics,
    Sports,
}

impl ExpertiseArea {
    /// Returns every area in display order.
    pub fn all() -> &'static [ExpertiseArea] {
        &[
            ExpertiseArea::Technology,
            ExpertiseArea::Business,
            ExpertiseArea::Health,
            ExpertiseArea::Finance,
            ExpertiseArea::Education,
            ExpertiseArea::Entertainment,
            ExpertiseArea::Lifestyle,
            ExpertiseArea::Science,
            ExpertiseArea::Politics,
            ExpertiseArea::Sports,
        ]
    }

    /// Stable identifier used on the wire.
    pub fn id(&self) -> &'static str {
        match self {
            ExpertiseArea::Technology => "technology",
            ExpertiseArea::Business => "business",
            ExpertiseArea::Health => "health",
            ExpertiseArea::Finance => "finance",
            ExpertiseArea::Education => "education",
            ExpertiseArea::Entertainment => "entertainment",
            ExpertiseArea::Lifestyle => "lifestyle",
            ExpertiseArea::Science => "science",
            ExpertiseArea::Politics => "politics",
            ExpertiseArea::Sports => "sports",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ExpertiseArea::Technology => "Technology",
            ExpertiseArea::Business => "Business",
            ExpertiseArea::Health => "Health & Wellness",
            ExpertiseArea::Finance => "Finance",
            ExpertiseArea::Education => "Education",
            ExpertiseArea::Entertainment => "Entertainment",
            ExpertiseArea::Lifestyle => "Lifestyle",
            ExpertiseArea::Science => "Science",
            ExpertiseArea::Politics => "Politics",
            ExpertiseArea::Sports => "Sports",
        }
    }
}

impl fmt::Display for ExpertiseArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExpertiseArea {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|area| area.id() == s)
            .ok_or_else(|| ValidationError::unknown_value("expertise", s))
    }
}
