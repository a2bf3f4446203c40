//! GetWizardHandler - Query handler for the current wizard state.

use std::sync::Arc;

use crate::domain::foundation::WizardId;
use crate::domain::onboarding::{OnboardingError, OnboardingWizard};
use crate::ports::WizardRepository;

#[derive(Debug, Clone)]
pub struct GetWizardQuery {
    pub wizard_id: WizardId,
}

pub struct GetWizardHandler {
    repository: Arc<dyn WizardRepository>,
}

impl GetWizardHandler {
    pub fn new(repository: Arc<dyn WizardRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetWizardQuery) -> Result<OnboardingWizard, OnboardingError> {
        super::load_wizard(self.repository.as_ref(), query.wizard_id).await
    }
}
