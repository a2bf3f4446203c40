//! HTTP handlers for dashboard endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::adapters::http::onboarding::ErrorResponse;
use crate::application::handlers::{GetDashboardHandler, GetDashboardQuery};
use crate::domain::dashboard::DashboardTabId;

#[derive(Clone)]
pub struct DashboardAppState {
    pub dashboard_handler: Arc<GetDashboardHandler>,
}

impl DashboardAppState {
    pub fn new(dashboard_handler: Arc<GetDashboardHandler>) -> Self {
        Self { dashboard_handler }
    }
}

/// GET /api/dashboard - Writer dashboard with metrics and tabs
pub async fn get_dashboard(State(state): State<DashboardAppState>) -> Response {
    let dashboard = state.dashboard_handler.handle(GetDashboardQuery).await;
    (StatusCode::OK, Json(dashboard)).into_response()
}

/// GET /api/dashboard/tabs/:tab - A single dashboard tab
pub async fn get_dashboard_tab(
    State(state): State<DashboardAppState>,
    Path(raw_tab): Path<String>,
) -> Response {
    let parsed = serde_json::from_value::<DashboardTabId>(serde_json::Value::from(raw_tab.as_str()));
    let tab_id = match parsed {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(format!("Unknown dashboard tab: {}", raw_tab))),
            )
                .into_response()
        }
    };

    let dashboard = state.dashboard_handler.handle(GetDashboardQuery).await;
    match dashboard.tab(tab_id) {
        Some(tab) => (StatusCode::OK, Json(tab.clone())).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Dashboard tab", &raw_tab)),
        )
            .into_response(),
    }
}
