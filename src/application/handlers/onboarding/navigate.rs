//! NavigateHandler - Command handler for next/previous step moves.
//!
//! Also owns the persistence and event rules every navigation outcome
//! follows, shared with `CompleteOnboardingHandler`.

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::foundation::{CommandMetadata, EventId, SerializableDomainEvent, Timestamp, WizardId};
use crate::domain::onboarding::{
    OnboardingCompleted, OnboardingError, OnboardingExited, OnboardingWizard, StepChanged,
    StepOutcome,
};
use crate::ports::{EventPublisher, WizardRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone)]
pub struct NavigateCommand {
    pub wizard_id: WizardId,
    pub direction: Direction,
}

#[derive(Debug, Clone)]
pub struct NavigateResult {
    /// Wizard after the move. Still returned after an exit, although the
    /// store no longer holds it.
    pub wizard: OnboardingWizard,
    pub outcome: StepOutcome,
}

pub struct NavigateHandler {
    repository: Arc<dyn WizardRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl NavigateHandler {
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
        cmd: NavigateCommand,
        metadata: CommandMetadata,
    ) -> Result<NavigateResult, OnboardingError> {
        let _guard = super::lock_wizard(cmd.wizard_id).await;
        let mut wizard = super::load_wizard(self.repository.as_ref(), cmd.wizard_id).await?;

        let outcome = match cmd.direction {
            Direction::Next => wizard.next(),
            Direction::Previous => wizard.previous(),
        };

        settle(
            self.repository.as_ref(),
            self.event_publisher.as_ref(),
            &wizard,
            &outcome,
            &metadata,
        )
        .await?;

        Ok(NavigateResult { wizard, outcome })
    }
}

/// Persists the wizard and publishes the event matching `outcome`.
///
/// - `Moved` → update, `StepChanged`
/// - `Exited` → delete, `OnboardingExited`
/// - `Completed` → update, `OnboardingCompleted`
/// - `Blocked` / `AlreadyComplete` → nothing
pub(super) async fn settle(
    repository: &dyn WizardRepository,
    publisher: &dyn EventPublisher,
    wizard: &OnboardingWizard,
    outcome: &StepOutcome,
    metadata: &CommandMetadata,
) -> Result<(), OnboardingError> {
    let correlation_id = metadata.correlation_id();

    match outcome {
        StepOutcome::Moved { from, to } => {
            repository.update(wizard).await?;
            let event = StepChanged {
                event_id: EventId::new(),
                wizard_id: wizard.id(),
                from: *from,
                to: *to,
                changed_at: Timestamp::now(),
            };
            publisher
                .publish(event.to_envelope()?.with_correlation_id(correlation_id))
                .await?;
            info!(wizard_id = %wizard.id(), %from, %to, "Onboarding step changed");
        }
        StepOutcome::Blocked(gate) => {
            debug!(
                wizard_id = %wizard.id(),
                step = %wizard.step(),
                gate = gate.as_str(),
                "Onboarding step blocked"
            );
        }
        StepOutcome::Exited => {
            repository.delete(&wizard.id()).await?;
            let event = OnboardingExited {
                event_id: EventId::new(),
                wizard_id: wizard.id(),
                exited_at: Timestamp::now(),
            };
            publisher
                .publish(event.to_envelope()?.with_correlation_id(correlation_id))
                .await?;
            info!(wizard_id = %wizard.id(), "Onboarding exited");
        }
        StepOutcome::Completed(profile) => {
            repository.update(wizard).await?;
            let event = OnboardingCompleted {
                event_id: EventId::new(),
                wizard_id: wizard.id(),
                profile: profile.clone(),
                started_at: wizard.started_at(),
                completed_at: wizard.completed_at().unwrap_or_else(Timestamp::now),
            };
            publisher
                .publish(event.to_envelope()?.with_correlation_id(correlation_id))
                .await?;
            info!(wizard_id = %wizard.id(), "Onboarding completed");
        }
        StepOutcome::AlreadyComplete => {
            debug!(wizard_id = %wizard.id(), "Onboarding already complete");
        }
    }
    Ok(())
}
