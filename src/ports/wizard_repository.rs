//! Wizard repository port.
//!
//! Stores onboarding wizards between host interactions. Wizards are
//! session-local and nothing here survives a restart. Exited wizards are
//! deleted; completed wizards stay readable so repeat completions resolve
//! to `AlreadyComplete`. Implementations may expire wizards left idle.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, WizardId};
use crate::domain::onboarding::OnboardingWizard;

#[async_trait]
pub trait WizardRepository: Send + Sync {
    /// Save a new wizard.
    ///
    /// # Errors
    ///
    /// - `StorageError` if a wizard with the same id exists
    async fn save(&self, wizard: &OnboardingWizard) -> Result<(), DomainError>;

    /// Replace a stored wizard.
    ///
    /// # Errors
    ///
    /// - `WizardNotFound` if the wizard doesn't exist
    async fn update(&self, wizard: &OnboardingWizard) -> Result<(), DomainError>;

    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &WizardId) -> Result<Option<OnboardingWizard>, DomainError>;

    /// Remove a wizard.
    ///
    /// # Errors
    ///
    /// - `WizardNotFound` if the wizard doesn't exist
    async fn delete(&self, id: &WizardId) -> Result<(), DomainError>;

    /// Number of wizards currently held.
    async fn count(&self) -> Result<usize, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wizard_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn WizardRepository) {}
    }
}
