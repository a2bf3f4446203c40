//! HTTP routes for onboarding endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    complete_onboarding, get_wizard, next_step, previous_step, profile_action, start_onboarding,
    toggle_task, tutorial_action, OnboardingHandlers,
};

/// Creates the onboarding router with all endpoints.
pub fn onboarding_routes(handlers: OnboardingHandlers) -> Router {
    Router::new()
        .route("/", post(start_onboarding))
        .route("/:id", get(get_wizard))
        .route("/:id/profile", post(profile_action))
        .route("/:id/tutorial", post(tutorial_action))
        .route("/:id/checklist/:task_id/toggle", post(toggle_task))
        .route("/:id/next", post(next_step))
        .route("/:id/previous", post(previous_step))
        .route("/:id/complete", post(complete_onboarding))
        .with_state(handlers)
}
