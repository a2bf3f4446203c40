//! Onboarding command and query handlers.

mod complete_onboarding;
mod edit_profile;
mod get_wizard;
mod navigate;
mod start_onboarding;
mod toggle_task;
mod tutorial_action;

#[cfg(test)]
pub(crate) mod test_support;

pub use complete_onboarding::{
    CompleteOnboardingCommand, CompleteOnboardingHandler, CompleteOnboardingResult, DASHBOARD_PATH,
};
pub use edit_profile::{
    EditProfileCommand, EditProfileHandler, EditProfileResult, ProfileAction, ProfileActionOutcome,
};
pub use get_wizard::{GetWizardHandler, GetWizardQuery};
pub use navigate::{Direction, NavigateCommand, NavigateHandler, NavigateResult};
pub use start_onboarding::StartOnboardingHandler;
pub use toggle_task::{ToggleTaskCommand, ToggleTaskHandler, ToggleTaskResult};
pub use tutorial_action::{
    TutorialAction, TutorialActionCommand, TutorialActionHandler, TutorialActionResult,
};

use once_cell::sync::Lazy;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::foundation::WizardId;
use crate::domain::onboarding::{OnboardingError, OnboardingWizard};
use crate::ports::WizardRepository;

const LOCK_STRIPES: usize = 64;

static WIZARD_LOCKS: Lazy<[Mutex<()>; LOCK_STRIPES]> =
    Lazy::new(|| std::array::from_fn(|_| Mutex::new(())));

/// Serializes load, mutate and store on one wizard.
///
/// Ids map onto a fixed set of stripes, so two unrelated wizards may
/// occasionally wait on each other. Hold at most one guard at a time.
async fn lock_wizard(id: WizardId) -> MutexGuard<'static, ()> {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    WIZARD_LOCKS[(hasher.finish() % LOCK_STRIPES as u64) as usize]
        .lock()
        .await
}

async fn load_wizard(
    repository: &dyn WizardRepository,
    id: WizardId,
) -> Result<OnboardingWizard, OnboardingError> {
    repository
        .find_by_id(&id)
        .await?
        .ok_or_else(|| OnboardingError::not_found(id))
}
