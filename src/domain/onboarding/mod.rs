//! Onboarding module - the wizard that sequences the onboarding steps.
//!
//! # Events
//!
//! - `OnboardingStarted` - wizard created
//! - `StepChanged` - wizard moved forward or back
//! - `QuizSubmitted` - quiz attempt scored
//! - `OnboardingExited` - writer left from the first step
//! - `OnboardingCompleted` - checklist finished, profile handed over

mod errors;
mod events;
mod status;
mod step;
mod wizard;

pub use errors::OnboardingError;
pub use events::{
    OnboardingCompleted, OnboardingExited, OnboardingStarted, QuizSubmitted, StepChanged,
};
pub use status::OnboardingStatus;
pub use step::OnboardingStep;
pub use wizard::{Gate, OnboardingWizard, StepOutcome};
