//! StartOnboardingHandler - Command handler for starting a wizard.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{CommandMetadata, EventId, SerializableDomainEvent, WizardId};
use crate::domain::onboarding::{OnboardingError, OnboardingStarted, OnboardingWizard};
use crate::domain::profile::SampleLimits;
use crate::ports::{EventPublisher, WizardRepository};

/// Handler for starting onboarding wizards.
///
/// Every wizard gets the sample limits the handler was built with.
pub struct StartOnboardingHandler {
    repository: Arc<dyn WizardRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    limits: SampleLimits,
}

impl StartOnboardingHandler {
    pub fn new(
        repository: Arc<dyn WizardRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        limits: SampleLimits,
    ) -> Self {
        Self {
            repository,
            event_publisher,
            limits,
        }
    }

    pub async fn handle(
        &self,
        metadata: CommandMetadata,
    ) -> Result<OnboardingWizard, OnboardingError> {
        let wizard = OnboardingWizard::start(WizardId::new(), self.limits.clone());
        self.repository.save(&wizard).await?;

        let event = OnboardingStarted {
            event_id: EventId::new(),
            wizard_id: wizard.id(),
            started_at: wizard.started_at(),
        };
        let envelope = event
            .to_envelope()?
            .with_correlation_id(metadata.correlation_id());
        self.event_publisher.publish(envelope).await?;

        info!(wizard_id = %wizard.id(), "Onboarding started");
        Ok(wizard)
    }
}
