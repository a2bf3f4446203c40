//! Dashboard HTTP adapter module.
//!
//! Read-only; the domain view models serialize directly.

pub mod handlers;
pub mod routes;

pub use handlers::DashboardAppState;
pub use routes::dashboard_routes;
