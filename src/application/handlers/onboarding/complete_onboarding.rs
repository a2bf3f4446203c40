//! CompleteOnboardingHandler - Command handler for the final checklist action.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, WizardId};
use crate::domain::onboarding::{OnboardingError, OnboardingWizard, StepOutcome};
use crate::ports::{EventPublisher, WizardRepository};

/// Where the host goes once onboarding is done.
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone)]
pub struct CompleteOnboardingCommand {
    pub wizard_id: WizardId,
}

#[derive(Debug, Clone)]
pub struct CompleteOnboardingResult {
    pub wizard: OnboardingWizard,
    pub outcome: StepOutcome,
    /// `DASHBOARD_PATH` once the wizard is complete.
    pub redirect_to: Option<&'static str>,
}

pub struct CompleteOnboardingHandler {
    repository: Arc<dyn WizardRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CompleteOnboardingHandler {
    pub fn new(
        repository: Arc<dyn WizardRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CompleteOnboardingCommand,
        metadata: CommandMetadata,
    ) -> Result<CompleteOnboardingResult, OnboardingError> {
        let _guard = super::lock_wizard(cmd.wizard_id).await;
        let mut wizard = super::load_wizard(self.repository.as_ref(), cmd.wizard_id).await?;
        let outcome = wizard.complete()?;

        super::navigate::settle(
            self.repository.as_ref(),
            self.event_publisher.as_ref(),
            &wizard,
            &outcome,
            &metadata,
        )
        .await?;

        let redirect_to = wizard.is_complete().then_some(DASHBOARD_PATH);
        Ok(CompleteOnboardingResult {
            wizard,
            outcome,
            redirect_to,
        })
    }
}
