//! HTTP routes for dashboard endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_dashboard, get_dashboard_tab, DashboardAppState};

/// Creates the dashboard router with all routes.
pub fn dashboard_routes(state: DashboardAppState) -> Router {
    Router::new()
        .route("/", get(get_dashboard))
        .route("/tabs/:tab", get(get_dashboard_tab))
        .with_state(state)
}
