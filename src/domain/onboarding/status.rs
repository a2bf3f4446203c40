//! OnboardingStatus - lifecycle of a wizard.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStatus {
    #[default]
    InProgress,
    Completed,
}

impl OnboardingStatus {
    /// Returns true if the wizard still accepts changes.
    pub fn is_mutable(&self) -> bool {
        matches!(self, OnboardingStatus::InProgress)
    }
}

impl StateMachine for OnboardingStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use OnboardingStatus::*;
        matches!((self, target), (InProgress, Completed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            OnboardingStatus::InProgress => vec![OnboardingStatus::Completed],
            OnboardingStatus::Completed => vec![],
        }
    }
}

impl fmt::Display for OnboardingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OnboardingStatus::InProgress => "In Progress",
            OnboardingStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}
