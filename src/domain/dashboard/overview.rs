//! WriterDashboard - the post-onboarding dashboard shell.
//!
//! No articles or analytics exist yet, so every view is the empty state.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

/// The dashboard a writer lands on after onboarding.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriterDashboard {
    pub title: String,
    pub subtitle: String,
    pub metrics: Vec<MetricCard>,
    pub tabs: Vec<DashboardTab>,
    /// Tab shown first.
    pub default_tab: DashboardTabId,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    pub label: String,
    pub value: MetricValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MetricValue {
    Count(u64),
    Rate(Percentage),
}

impl MetricValue {
    /// Display form: "0" for counts, "0%" for rates.
    pub fn display(&self) -> String {
        match self {
            MetricValue::Count(n) => n.to_string(),
            MetricValue::Rate(p) => p.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTabId {
    Articles,
    Analytics,
    Calendar,
    Settings,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTab {
    pub id: DashboardTabId,
    pub label: String,
    pub empty_state: EmptyState,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyState {
    pub heading: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl EmptyState {
    fn new(heading: &str, message: &str, action: Option<&str>) -> Self {
        Self {
            heading: heading.to_string(),
            message: message.to_string(),
            action: action.map(str::to_string),
        }
    }
}

fn metric(label: &str, value: MetricValue) -> MetricCard {
    MetricCard {
        label: label.to_string(),
        value,
    }
}

fn tab(id: DashboardTabId, label: &str, empty_state: EmptyState) -> DashboardTab {
    DashboardTab {
        id,
        label: label.to_string(),
        empty_state,
    }
}

impl WriterDashboard {
    /// Dashboard for a writer with nothing published.
    pub fn placeholder() -> Self {
        Self {
            title: "Writer Dashboard".to_string(),
            subtitle: "Manage your content and track your performance".to_string(),
            metrics: vec![
                metric("Articles Published", MetricValue::Count(0)),
                metric("Total Views", MetricValue::Count(0)),
                metric("Engagement Rate", MetricValue::Rate(Percentage::ZERO)),
            ],
            tabs: vec![
                tab(
                    DashboardTabId::Articles,
                    "Articles",
                    EmptyState::new(
                        "No articles yet",
                        "You haven't published any articles yet. Start writing your first piece.",
                        Some("Create Your First Article"),
                    ),
                ),
                tab(
                    DashboardTabId::Analytics,
                    "Analytics",
                    EmptyState::new(
                        "No analytics data",
                        "Analytics will appear once you've published content.",
                        None,
                    ),
                ),
                tab(
                    DashboardTabId::Calendar,
                    "Calendar",
                    EmptyState::new(
                        "Your publishing calendar",
                        "Plan and schedule your content for consistent publishing.",
                        Some("Schedule Content"),
                    ),
                ),
                tab(
                    DashboardTabId::Settings,
                    "Settings",
                    EmptyState::new(
                        "Profile Settings",
                        "Manage your writer profile and preferences.",
                        None,
                    ),
                ),
            ],
            default_tab: DashboardTabId::Articles,
        }
    }

    pub fn tab(&self, id: DashboardTabId) -> Option<&DashboardTab> {
        self.tabs.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod tests;
