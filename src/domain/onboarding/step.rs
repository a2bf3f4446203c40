//! OnboardingStep - the four wizard screens in order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    #[default]
    Profile,
    Tutorial,
    Preview,
    Checklist,
}

impl OnboardingStep {
    pub fn all() -> &'static [OnboardingStep] {
        &[
            OnboardingStep::Profile,
            OnboardingStep::Tutorial,
            OnboardingStep::Preview,
            OnboardingStep::Checklist,
        ]
    }

    /// Zero-based position in the sequence.
    pub fn index(&self) -> usize {
        match self {
            OnboardingStep::Profile => 0,
            OnboardingStep::Tutorial => 1,
            OnboardingStep::Preview => 2,
            OnboardingStep::Checklist => 3,
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::all().get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::all()[i])
    }

    /// Progress bar value: 0, 33, 66, 100.
    pub fn progress(&self) -> Percentage {
        Percentage::of(self.index(), Self::all().len() - 1)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OnboardingStep::Profile => "Create Your Profile",
            OnboardingStep::Tutorial => "Platform Guidelines",
            OnboardingStep::Preview => "Dashboard Preview",
            OnboardingStep::Checklist => "Welcome Checklist",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingStep::Profile => "profile",
            OnboardingStep::Tutorial => "tutorial",
            OnboardingStep::Preview => "preview",
            OnboardingStep::Checklist => "checklist",
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
