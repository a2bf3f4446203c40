//! GetDashboardHandler - Query handler for the writer dashboard.
//!
//! There is no content store behind the dashboard yet; every writer sees
//! the placeholder.

use crate::domain::dashboard::WriterDashboard;

#[derive(Debug, Clone, Default)]
pub struct GetDashboardQuery;

#[derive(Debug, Clone, Default)]
pub struct GetDashboardHandler;

impl GetDashboardHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(&self, _query: GetDashboardQuery) -> WriterDashboard {
        WriterDashboard::placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_placeholder_dashboard() {
        let dashboard = GetDashboardHandler::new().handle(GetDashboardQuery).await;
        assert_eq!(dashboard.metrics.len(), 3);
        assert_eq!(dashboard.tabs.len(), 4);
    }
}
