//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dashboard;
pub mod onboarding;

pub use dashboard::{GetDashboardHandler, GetDashboardQuery};
pub use onboarding::{
    CompleteOnboardingCommand, CompleteOnboardingHandler, CompleteOnboardingResult, Direction,
    EditProfileCommand, EditProfileHandler, EditProfileResult, GetWizardHandler, GetWizardQuery,
    NavigateCommand, NavigateHandler, NavigateResult, ProfileAction, ProfileActionOutcome,
    StartOnboardingHandler, ToggleTaskCommand, ToggleTaskHandler, ToggleTaskResult,
    TutorialAction, TutorialActionCommand, TutorialActionHandler, TutorialActionResult,
    DASHBOARD_PATH,
};
