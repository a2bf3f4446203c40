//! HTTP adapter for the onboarding wizard.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, NavigationResponse, ProfileActionRequest, TutorialActionRequest,
    WizardResponse,
};
pub use handlers::{OnboardingHandlers, REQUEST_ID_HEADER};
pub use routes::onboarding_routes;
