//! Dashboard module - placeholder views for a writer with no content yet.

mod overview;
mod preview;

pub use overview::{
    DashboardTab, DashboardTabId, EmptyState, MetricCard, MetricValue, WriterDashboard,
};
pub use preview::{DashboardPreview, QuickAction};
