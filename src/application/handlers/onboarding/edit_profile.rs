//! EditProfileHandler - Command handler for profile form changes.

use std::sync::Arc;
use tracing::debug;

use crate::domain::foundation::WizardId;
use crate::domain::onboarding::{OnboardingError, OnboardingWizard};
use crate::domain::profile::{FieldErrors, ProfileEdit, StageMove};
use crate::ports::WizardRepository;

/// What to do with the profile form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileAction {
    Edit(ProfileEdit),
    NextStage,
    PreviousStage,
}

#[derive(Debug, Clone)]
pub struct EditProfileCommand {
    pub wizard_id: WizardId,
    pub action: ProfileAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileActionOutcome {
    /// Edit applied; the refreshed error map.
    Edited(FieldErrors),
    Stage(StageMove),
}

#[derive(Debug, Clone)]
pub struct EditProfileResult {
    pub wizard: OnboardingWizard,
    pub outcome: ProfileActionOutcome,
}

pub struct EditProfileHandler {
    repository: Arc<dyn WizardRepository>,
}

impl EditProfileHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: EditProfileCommand) -> Result<EditProfileResult, OnboardingError> {
        let _guard = super::lock_wizard(cmd.wizard_id).await;
        let mut wizard = super::load_wizard(self.repository.as_ref(), cmd.wizard_id).await?;

        let outcome = match cmd.action {
            ProfileAction::Edit(edit) => ProfileActionOutcome::Edited(wizard.edit_profile(edit)?),
            ProfileAction::NextStage => ProfileActionOutcome::Stage(wizard.next_profile_stage()?),
            ProfileAction::PreviousStage => {
                ProfileActionOutcome::Stage(wizard.previous_profile_stage()?)
            }
        };

        if let ProfileActionOutcome::Stage(StageMove::Blocked(errors)) = &outcome {
            debug!(
                wizard_id = %wizard.id(),
                stage = ?wizard.profile_form().stage(),
                invalid = errors.len(),
                "Profile stage blocked"
            );
        }

        self.repository.update(&wizard).await?;
        Ok(EditProfileResult { wizard, outcome })
    }
}
