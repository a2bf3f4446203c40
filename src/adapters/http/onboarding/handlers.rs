//! HTTP handlers for onboarding endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::application::handlers::onboarding::{
    CompleteOnboardingCommand, CompleteOnboardingHandler, Direction, EditProfileCommand,
    EditProfileHandler, GetWizardHandler, GetWizardQuery, NavigateCommand, NavigateHandler,
    StartOnboardingHandler, ToggleTaskCommand, ToggleTaskHandler, TutorialActionCommand,
    TutorialActionHandler, DASHBOARD_PATH,
};
use crate::domain::foundation::{CommandMetadata, WizardId};
use crate::domain::onboarding::{OnboardingError, OnboardingWizard, StepOutcome};

use super::dto::{
    ErrorResponse, NavigationOutcomeView, NavigationResponse, ProfileActionRequest,
    ProfileActionResponse, ProfileResultView, QuizScoreView, ToggleTaskResponse,
    TutorialActionRequest, TutorialActionResponse, WizardResponse,
};

/// Header carrying the caller's correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct OnboardingHandlers {
    start_handler: Arc<StartOnboardingHandler>,
    get_handler: Arc<GetWizardHandler>,
    profile_handler: Arc<EditProfileHandler>,
    tutorial_handler: Arc<TutorialActionHandler>,
    toggle_handler: Arc<ToggleTaskHandler>,
    navigate_handler: Arc<NavigateHandler>,
    complete_handler: Arc<CompleteOnboardingHandler>,
    verbose_errors: bool,
}

impl OnboardingHandlers {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_handler: Arc<StartOnboardingHandler>,
        get_handler: Arc<GetWizardHandler>,
        profile_handler: Arc<EditProfileHandler>,
        tutorial_handler: Arc<TutorialActionHandler>,
        toggle_handler: Arc<ToggleTaskHandler>,
        navigate_handler: Arc<NavigateHandler>,
        complete_handler: Arc<CompleteOnboardingHandler>,
    ) -> Self {
        Self {
            start_handler,
            get_handler,
            profile_handler,
            tutorial_handler,
            toggle_handler,
            navigate_handler,
            complete_handler,
            verbose_errors: false,
        }
    }

    /// Exposes infrastructure error messages in 500 responses.
    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/onboarding - Start a new wizard
pub async fn start_onboarding(
    State(handlers): State<OnboardingHandlers>,
    headers: HeaderMap,
) -> Response {
    match handlers.start_handler.handle(metadata_from(&headers)).await {
        Ok(wizard) => {
            (StatusCode::CREATED, Json(WizardResponse::from(&wizard))).into_response()
        }
        Err(e) => handle_onboarding_error(e, handlers.verbose_errors),
    }
}

/// GET /api/onboarding/:id - Current wizard state
pub async fn get_wizard(
    State(handlers): State<OnboardingHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    let wizard_id = match parse_wizard_id(&wizard_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetWizardQuery { wizard_id }).await {
        Ok(wizard) => (StatusCode::OK, Json(WizardResponse::from(&wizard))).into_response(),
        Err(e) => handle_onboarding_error(e, handlers.verbose_errors),
    }
}

/// POST /api/onboarding/:id/profile - Edit the profile form or move between its stages
pub async fn profile_action(
    State(handlers): State<OnboardingHandlers>,
    Path(wizard_id): Path<String>,
    body: Result<Json<ProfileActionRequest>, JsonRejection>,
) -> Response {
    let wizard_id = match parse_wizard_id(&wizard_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let req = match parse_body(body) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let cmd = EditProfileCommand {
        wizard_id,
        action: req.into(),
    };

    match handlers.profile_handler.handle(cmd).await {
        Ok(result) => {
            let response = ProfileActionResponse {
                result: ProfileResultView::from(result.outcome),
                wizard: WizardResponse::from(&result.wizard),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_onboarding_error(e, handlers.verbose_errors),
    }
}

/// POST /api/onboarding/:id/tutorial - Tab navigation and quiz actions
pub async fn tutorial_action(
    State(handlers): State<OnboardingHandlers>,
    headers: HeaderMap,
    Path(wizard_id): Path<String>,
    body: Result<Json<TutorialActionRequest>, JsonRejection>,
) -> Response {
    let wizard_id = match parse_wizard_id(&wizard_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let req = match parse_body(body) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let cmd = TutorialActionCommand {
        wizard_id,
        action: req.into(),
    };

    match handlers
        .tutorial_handler
        .handle(cmd, metadata_from(&headers))
        .await
    {
        Ok(result) => {
            let response = TutorialActionResponse {
                score: result.score.map(QuizScoreView::from),
                wizard: WizardResponse::from(&result.wizard),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_onboarding_error(e, handlers.verbose_errors),
    }
}

/// POST /api/onboarding/:id/checklist/:task_id/toggle - Toggle a checklist task
pub async fn toggle_task(
    State(handlers): State<OnboardingHandlers>,
    Path((wizard_id, task_id)): Path<(String, u8)>,
) -> Response {
    let wizard_id = match parse_wizard_id(&wizard_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ToggleTaskCommand { wizard_id, task_id };

    match handlers.toggle_handler.handle(cmd).await {
        Ok(result) => {
            let response = ToggleTaskResponse {
                task_id,
                completed: result.completed,
                wizard: WizardResponse::from(&result.wizard),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_onboarding_error(e, handlers.verbose_errors),
    }
}

/// POST /api/onboarding/:id/next - Advance one step
pub async fn next_step(
    State(handlers): State<OnboardingHandlers>,
    headers: HeaderMap,
    Path(wizard_id): Path<String>,
) -> Response {
    navigate(handlers, headers, wizard_id, Direction::Next).await
}

/// POST /api/onboarding/:id/previous - Go back one step, exiting from the first
pub async fn previous_step(
    State(handlers): State<OnboardingHandlers>,
    headers: HeaderMap,
    Path(wizard_id): Path<String>,
) -> Response {
    navigate(handlers, headers, wizard_id, Direction::Previous).await
}

async fn navigate(
    handlers: OnboardingHandlers,
    headers: HeaderMap,
    wizard_id: String,
    direction: Direction,
) -> Response {
    let wizard_id = match parse_wizard_id(&wizard_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = NavigateCommand {
        wizard_id,
        direction,
    };

    match handlers
        .navigate_handler
        .handle(cmd, metadata_from(&headers))
        .await
    {
        Ok(result) => {
            let redirect_to = result.wizard.is_complete().then_some(DASHBOARD_PATH);
            let response = navigation_response(&result.outcome, redirect_to, &result.wizard);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_onboarding_error(e, handlers.verbose_errors),
    }
}

/// POST /api/onboarding/:id/complete - Finish onboarding from the checklist step
pub async fn complete_onboarding(
    State(handlers): State<OnboardingHandlers>,
    headers: HeaderMap,
    Path(wizard_id): Path<String>,
) -> Response {
    let wizard_id = match parse_wizard_id(&wizard_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = CompleteOnboardingCommand { wizard_id };

    match handlers
        .complete_handler
        .handle(cmd, metadata_from(&headers))
        .await
    {
        Ok(result) => {
            let response = navigation_response(&result.outcome, result.redirect_to, &result.wizard);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_onboarding_error(e, handlers.verbose_errors),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn navigation_response(
    outcome: &StepOutcome,
    redirect_to: Option<&'static str>,
    wizard: &OnboardingWizard,
) -> NavigationResponse {
    let wizard = match outcome {
        StepOutcome::Exited => None,
        _ => Some(WizardResponse::from(wizard)),
    };
    NavigationResponse {
        outcome: NavigationOutcomeView::from(outcome),
        redirect_to,
        wizard,
    }
}

fn parse_wizard_id(raw: &str) -> Result<WizardId, Response> {
    raw.parse::<WizardId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid wizard ID")),
        )
            .into_response()
    })
}

/// Malformed JSON, unknown actions and a missing content type all answer
/// 400 with the extractor's reason in `details`.
fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    body.map(|Json(req)| req).map_err(|rejection| {
        let reason = rejection.body_text();
        (
            StatusCode::BAD_REQUEST,
            Json(
                ErrorResponse::bad_request("Invalid request body")
                    .with_details(serde_json::json!({ "reason": reason })),
            ),
        )
            .into_response()
    })
}

fn metadata_from(headers: &HeaderMap) -> CommandMetadata {
    let metadata = CommandMetadata::new().with_source("http");
    match headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
    {
        Some(id) => metadata.with_correlation_id(id),
        None => metadata,
    }
}

/// Maps onboarding errors to HTTP responses.
fn handle_onboarding_error(error: OnboardingError, verbose: bool) -> Response {
    let code = error.code().to_string();
    let (status, body) = match &error {
        OnboardingError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            ErrorResponse::not_found("Wizard", &id.to_string()),
        ),
        OnboardingError::WrongStep { .. }
        | OnboardingError::AlreadyCompleted
        | OnboardingError::InvalidQuizPhase(_) => (
            StatusCode::CONFLICT,
            ErrorResponse::new(code, error.message()),
        ),
        OnboardingError::InvalidInput { field, .. } => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(code, error.message())
                .with_details(serde_json::json!({ "field": field })),
        ),
        OnboardingError::QuizIncomplete { answered, total } => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(code, error.message())
                .with_details(serde_json::json!({ "answered": answered, "total": total })),
        ),
        OnboardingError::Infrastructure(message) => {
            error!(error = %message, "Onboarding request failed");
            let message = if verbose {
                message.clone()
            } else {
                "An internal error occurred".to_string()
            };
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(message))
        }
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn metadata_uses_request_id_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("req-42"));
        let metadata = metadata_from(&headers);
        assert_eq!(metadata.correlation_id(), "req-42");
        assert_eq!(metadata.source(), Some("http"));
    }

    #[test]
    fn metadata_without_header_has_no_correlation_id() {
        let metadata = metadata_from(&HeaderMap::new());
        assert!(metadata.correlation_id_opt().is_none());
    }

    #[test]
    fn invalid_wizard_id_is_bad_request() {
        let response = parse_wizard_id("not-a-uuid").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_onboarding_error(OnboardingError::not_found(WizardId::new()), false);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn step_conflicts_map_to_409() {
        let response = handle_onboarding_error(OnboardingError::AlreadyCompleted, false);
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response =
            handle_onboarding_error(OnboardingError::InvalidQuizPhase("nope".into()), false);
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn input_errors_map_to_400() {
        let response =
            handle_onboarding_error(OnboardingError::invalid_input("task_id", "unknown"), false);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = handle_onboarding_error(
            OnboardingError::QuizIncomplete {
                answered: 1,
                total: 3,
            },
            false,
        );
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_onboarding_error(OnboardingError::infrastructure("disk"), true);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
