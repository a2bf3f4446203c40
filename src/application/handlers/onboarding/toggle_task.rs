//! ToggleTaskHandler - Command handler for welcome checklist tasks.

use std::sync::Arc;
use tracing::debug;

use crate::domain::foundation::WizardId;
use crate::domain::onboarding::{OnboardingError, OnboardingWizard};
use crate::ports::WizardRepository;

#[derive(Debug, Clone)]
pub struct ToggleTaskCommand {
    pub wizard_id: WizardId,
    pub task_id: u8,
}

#[derive(Debug, Clone)]
pub struct ToggleTaskResult {
    pub wizard: OnboardingWizard,
    /// The task's new state.
    pub completed: bool,
}

pub struct ToggleTaskHandler {
    repository: Arc<dyn WizardRepository>,
}

impl ToggleTaskHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ToggleTaskCommand) -> Result<ToggleTaskResult, OnboardingError> {
        let _guard = super::lock_wizard(cmd.wizard_id).await;
        let mut wizard = super::load_wizard(self.repository.as_ref(), cmd.wizard_id).await?;
        let completed = wizard.toggle_task(cmd.task_id)?;
        self.repository.update(&wizard).await?;

        debug!(
            wizard_id = %wizard.id(),
            task_id = cmd.task_id,
            completed,
            "Checklist task toggled"
        );
        Ok(ToggleTaskResult { wizard, completed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::onboarding::test_support::{
        wizard_at, MockWizardRepository,
    };
    use crate::domain::onboarding::OnboardingStep;

    #[tokio::test]
    async fn toggles_and_persists() {
        let wizard = wizard_at(OnboardingStep::Checklist);
        let repo = Arc::new(MockWizardRepository::with(wizard.clone()));
        let handler = ToggleTaskHandler::new(repo.clone());

        let result = handler
            .handle(ToggleTaskCommand {
                wizard_id: wizard.id(),
                task_id: 2,
            })
            .await
            .unwrap();

        assert!(result.completed);
        assert_eq!(repo.get(&wizard.id()).unwrap().checklist().completed_count(), 1);
    }

    #[tokio::test]
    async fn unknown_task_is_invalid_input() {
        let wizard = wizard_at(OnboardingStep::Checklist);
        let handler = ToggleTaskHandler::new(Arc::new(MockWizardRepository::with(wizard.clone())));

        let result = handler
            .handle(ToggleTaskCommand {
                wizard_id: wizard.id(),
                task_id: 0,
            })
            .await;
        assert!(matches!(result, Err(OnboardingError::InvalidInput { .. })));
    }

    #[tokio::test]
    async fn rejected_before_checklist_step() {
        let wizard = wizard_at(OnboardingStep::Preview);
        let handler = ToggleTaskHandler::new(Arc::new(MockWizardRepository::with(wizard.clone())));

        let result = handler
            .handle(ToggleTaskCommand {
                wizard_id: wizard.id(),
                task_id: 1,
            })
            .await;
        assert_eq!(
            result.map(|r| r.completed),
            Err(OnboardingError::wrong_step(
                OnboardingStep::Checklist,
                OnboardingStep::Preview
            ))
        );
    }

    #[tokio::test]
    async fn interleaved_toggles_do_not_lose_updates() {
        let wizard = wizard_at(OnboardingStep::Checklist);
        let repo = Arc::new(MockWizardRepository::interleaving(wizard.clone()));
        let handler = ToggleTaskHandler::new(repo.clone());
        let command = |task_id| ToggleTaskCommand {
            wizard_id: wizard.id(),
            task_id,
        };

        let (first, second, third) = tokio::join!(
            handler.handle(command(1)),
            handler.handle(command(2)),
            handler.handle(command(3)),
        );
        first.unwrap();
        second.unwrap();
        third.unwrap();

        assert!(repo.get(&wizard.id()).unwrap().checklist().all_completed());
    }
}
