//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter; `app_router` mounts them
//! under `/api` with the shared middleware stack.

pub mod dashboard;
pub mod onboarding;

use std::sync::Arc;

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{info, warn, Level};

use crate::application::handlers::{
    CompleteOnboardingHandler, EditProfileHandler, GetDashboardHandler, GetWizardHandler,
    NavigateHandler, StartOnboardingHandler, ToggleTaskHandler, TutorialActionHandler,
};
use crate::config::{AppConfig, ServerConfig};
use crate::ports::{EventPublisher, WizardRepository};

pub use dashboard::{dashboard_routes, DashboardAppState};
pub use onboarding::{onboarding_routes, ErrorResponse, OnboardingHandlers, REQUEST_ID_HEADER};

/// Route state for every HTTP adapter.
#[derive(Clone)]
pub struct AppState {
    pub onboarding: OnboardingHandlers,
    pub dashboard: DashboardAppState,
}

impl AppState {
    /// Wires every application handler against one repository and publisher.
    pub fn new(
        repository: Arc<dyn WizardRepository>,
        publisher: Arc<dyn EventPublisher>,
        config: &AppConfig,
    ) -> Self {
        let onboarding = OnboardingHandlers::new(
            Arc::new(StartOnboardingHandler::new(
                repository.clone(),
                publisher.clone(),
                config.uploads.sample_limits(),
            )),
            Arc::new(GetWizardHandler::new(repository.clone())),
            Arc::new(EditProfileHandler::new(repository.clone())),
            Arc::new(TutorialActionHandler::new(
                repository.clone(),
                publisher.clone(),
            )),
            Arc::new(ToggleTaskHandler::new(repository.clone())),
            Arc::new(NavigateHandler::new(repository.clone(), publisher.clone())),
            Arc::new(CompleteOnboardingHandler::new(repository, publisher)),
        )
        .with_verbose_errors(config.features.verbose_errors);

        let dashboard = DashboardAppState::new(Arc::new(GetDashboardHandler::new()));

        Self {
            onboarding,
            dashboard,
        }
    }
}

/// Creates the application router.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let api = Router::new()
        .nest("/onboarding", onboarding_routes(state.onboarding))
        .nest("/dashboard", dashboard_routes(state.dashboard));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(build_cors_layer(server))
        .layer(trace_layer)
}

/// GET /health - Liveness check
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Configured origins are allowed; with none configured, production denies
/// cross-origin requests and other environments allow any origin.
fn build_cors_layer(server: &ServerConfig) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    let headers = [
        header::CONTENT_TYPE,
        header::ACCEPT,
        HeaderName::from_static(REQUEST_ID_HEADER),
    ];

    let configured = server.allowed_origins();
    if configured.is_empty() {
        if server.is_production() {
            warn!("CORS: No origins configured, denying cross-origin requests");
            return CorsLayer::new()
                .allow_origin(AllowOrigin::exact(HeaderValue::from_static("null")));
        }
        return CorsLayer::new()
            .allow_origin(AllowOrigin::any())
            .allow_methods(methods)
            .allow_headers(headers);
    }

    let origins: Vec<HeaderValue> = configured
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                warn!("CORS: Invalid origin in config: {}", origin);
                None
            })
        })
        .collect();

    info!("CORS: Allowing {} origin(s)", origins.len());
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
}
