//! TutorialTab - the three tutorial tabs and their progress values.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TutorialTab {
    #[default]
    Guidelines,
    Editorial,
    Quiz,
}

impl TutorialTab {
    pub fn all() -> &'static [TutorialTab] {
        &[TutorialTab::Guidelines, TutorialTab::Editorial, TutorialTab::Quiz]
    }

    /// Fixed progress shown while this tab is active.
    pub fn progress(&self) -> Percentage {
        match self {
            TutorialTab::Guidelines => Percentage::new(33),
            TutorialTab::Editorial => Percentage::new(66),
            TutorialTab::Quiz => Percentage::HUNDRED,
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            TutorialTab::Guidelines => Some(TutorialTab::Editorial),
            TutorialTab::Editorial => Some(TutorialTab::Quiz),
            TutorialTab::Quiz => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            TutorialTab::Guidelines => None,
            TutorialTab::Editorial => Some(TutorialTab::Guidelines),
            TutorialTab::Quiz => Some(TutorialTab::Editorial),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TutorialTab::Guidelines => "Content Guidelines",
            TutorialTab::Editorial => "Editorial Process",
            TutorialTab::Quiz => "Comprehension Check",
        }
    }
}

impl fmt::Display for TutorialTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
