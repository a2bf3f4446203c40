//! DashboardPreview - what the preview step shows before the real dashboard.

use serde::Serialize;

use super::{MetricCard, MetricValue};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPreview {
    pub heading: String,
    pub intro: String,
    pub metrics: Vec<MetricCard>,
    pub schedule_message: String,
    pub quick_actions: Vec<QuickAction>,
}

impl DashboardPreview {
    pub fn new() -> Self {
        let card = |label: &str| MetricCard {
            label: label.to_string(),
            value: MetricValue::Count(0),
        };
        let action = |label: &str, description: &str| QuickAction {
            label: label.to_string(),
            description: description.to_string(),
        };

        Self {
            heading: "Preview Your Dashboard".to_string(),
            intro: "Here's what your writer dashboard will look like once you're onboarded"
                .to_string(),
            metrics: vec![
                card("Articles Published"),
                card("Total Views"),
                card("Subscribers"),
            ],
            schedule_message: "Your publishing schedule will appear here".to_string(),
            quick_actions: vec![
                action("Article Editor", "Create and edit your content"),
                action("Analytics", "Track your performance"),
            ],
        }
    }
}

impl Default for DashboardPreview {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_shows_zero_articles_and_two_actions() {
        let preview = DashboardPreview::new();
        assert_eq!(preview.metrics[0].label, "Articles Published");
        assert_eq!(preview.metrics[0].value, MetricValue::Count(0));
        assert_eq!(preview.quick_actions.len(), 2);
        assert_eq!(
            preview.schedule_message,
            "Your publishing schedule will appear here"
        );
    }
}
