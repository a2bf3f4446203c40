//! In-memory event bus.
//!
//! Delivers each event to its subscribed handlers in-process, in
//! subscription order. Optionally keeps a copy of every published event for
//! assertions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::warn;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::{EventHandler, EventPublisher, EventSubscriber};

/// In-process event bus.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::with_capture());
/// bus.subscribe("onboarding.completed.v1", Arc::new(CompletionLogger::new()));
///
/// bus.publish(envelope).await?;
/// assert!(bus.has_event("onboarding.completed.v1"));
/// ```
pub struct InMemoryEventBus {
    handlers: RwLock<HashMap<String, Vec<Arc<dyn EventHandler>>>>,
    published: Option<RwLock<Vec<EventEnvelope>>>,
}

impl InMemoryEventBus {
    /// Bus that only dispatches.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            published: None,
        }
    }

    /// Bus that also records every published event.
    pub fn with_capture() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            published: Some(RwLock::new(Vec::new())),
        }
    }

    /// Returns all captured events. Empty unless built `with_capture`.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        match &self.published {
            Some(published) => published
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
            None => Vec::new(),
        }
    }

    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .collect()
    }

    pub fn event_count(&self) -> usize {
        self.published_events().len()
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        self.published_events()
            .iter()
            .any(|e| e.event_type == event_type)
    }

    fn handlers_for(&self, event_type: &str) -> Result<Vec<Arc<dyn EventHandler>>, DomainError> {
        let handlers = self.handlers.read().map_err(|_| {
            DomainError::new(ErrorCode::InternalError, "Event handler registry poisoned")
        })?;
        Ok(handlers.get(event_type).cloned().unwrap_or_default())
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if let Some(published) = &self.published {
            published
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event.clone());
        }

        // Cloned so no lock is held across the awaits below
        let type_handlers = self.handlers_for(&event.event_type)?;

        let mut errors = Vec::new();
        for handler in type_handlers {
            if let Err(e) = handler.handle(event.clone()).await {
                warn!(
                    handler = handler.name(),
                    event_type = %event.event_type,
                    error = %e,
                    "Event handler failed"
                );
                errors.push(format!("{}: {}", handler.name(), e));
            }
        }

        if !errors.is_empty() {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Handler errors: {}", errors.join(", ")),
            ));
        }

        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

impl EventSubscriber for InMemoryEventBus {
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>) {
        self.subscribe_all(&[event_type], handler);
    }

    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>) {
        let mut handlers = self
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        for event_type in event_types {
            handlers
                .entry(event_type.to_string())
                .or_default()
                .push(Arc::clone(&handler));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn test_envelope(event_type: &str, aggregate_id: &str) -> EventEnvelope {
        EventEnvelope::new(event_type, aggregate_id, "OnboardingWizard", json!({}))
    }

    struct CountingHandler(Arc<AtomicUsize>);

    #[async_trait]
    impl EventHandler for CountingHandler {
        async fn handle(&self, _: EventEnvelope) -> Result<(), DomainError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
        fn name(&self) -> &'static str {
            "CountingHandler"
        }
    }

    #[tokio::test]
    async fn capture_records_published_events() {
        let bus = InMemoryEventBus::with_capture();

        bus.publish(test_envelope("onboarding.started.v1", "w-1"))
            .await
            .unwrap();
        bus.publish(test_envelope("onboarding.exited.v1", "w-2"))
            .await
            .unwrap();
        bus.publish(test_envelope("onboarding.started.v1", "w-2"))
            .await
            .unwrap();

        assert_eq!(bus.event_count(), 3);
        assert_eq!(bus.events_of_type("onboarding.started.v1").len(), 2);
        assert_eq!(bus.events_for_aggregate("w-2").len(), 2);
        assert!(bus.has_event("onboarding.exited.v1"));
    }

    #[tokio::test]
    async fn plain_bus_keeps_nothing() {
        let bus = InMemoryEventBus::new();
        bus.publish(test_envelope("onboarding.started.v1", "w-1"))
            .await
            .unwrap();
        assert_eq!(bus.event_count(), 0);
    }

    #[tokio::test]
    async fn every_subscribed_handler_is_invoked() {
        let bus = InMemoryEventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        bus.subscribe("onboarding.completed.v1", Arc::new(CountingHandler(counter.clone())));
        bus.subscribe("onboarding.completed.v1", Arc::new(CountingHandler(counter.clone())));

        bus.publish(test_envelope("onboarding.completed.v1", "w-1"))
            .await
            .unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn subscribe_all_matches_only_listed_types() {
        let bus = InMemoryEventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));

        bus.subscribe_all(
            &["onboarding.started.v1", "onboarding.exited.v1"],
            Arc::new(CountingHandler(counter.clone())),
        );

        bus.publish_all(vec![
            test_envelope("onboarding.started.v1", "1"),
            test_envelope("onboarding.exited.v1", "1"),
            test_envelope("onboarding.step_changed.v1", "1"),
        ])
        .await
        .unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn handler_error_is_propagated() {
        let bus = InMemoryEventBus::new();

        struct FailingHandler;

        #[async_trait]
        impl EventHandler for FailingHandler {
            async fn handle(&self, _: EventEnvelope) -> Result<(), DomainError> {
                Err(DomainError::new(ErrorCode::InternalError, "Handler failed"))
            }
            fn name(&self) -> &'static str {
                "FailingHandler"
            }
        }

        bus.subscribe("onboarding.started.v1", Arc::new(FailingHandler));
        let result = bus.publish(test_envelope("onboarding.started.v1", "1")).await;

        assert!(result.unwrap_err().message.contains("FailingHandler"));
    }
}
