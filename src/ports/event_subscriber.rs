//! EventSubscriber port - Interface for subscribing to domain events.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Handler for processing domain events.
///
/// Handlers should be idempotent and quick; a failing handler does not
/// stop delivery to the others.
///
/// # Example
///
/// ```ignore
/// struct ProfileExporter;
///
/// #[async_trait]
/// impl EventHandler for ProfileExporter {
///     async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
///         let completed: OnboardingCompleted = event.payload_as()?;
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "ProfileExporter"
///     }
/// }
/// ```
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Process an event.
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Handler name for logging.
    fn name(&self) -> &'static str;
}

/// Port for subscribing to domain events.
///
/// ```ignore
/// subscriber.subscribe("onboarding.completed.v1", completion_logger);
/// subscriber.subscribe_all(&["onboarding.started.v1", "onboarding.exited.v1"], audit);
/// ```
pub trait EventSubscriber: Send + Sync {
    /// Subscribe handler to a specific event type.
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    /// Subscribe handler to multiple event types.
    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>);
}

/// Combined trait for event bus implementations.
pub trait EventBus: super::EventPublisher + EventSubscriber {}

impl<T: super::EventPublisher + EventSubscriber> EventBus for T {}
