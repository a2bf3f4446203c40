//! Mock ports and wizard fixtures shared by the onboarding handler tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope, WizardId};
use crate::domain::onboarding::{OnboardingStep, OnboardingWizard};
use crate::domain::profile::{ExpertiseArea, ProfileEdit, SampleLimits};
use crate::domain::tutorial::TutorialTab;
use crate::ports::{EventPublisher, WizardRepository};

pub struct MockWizardRepository {
    wizards: Mutex<HashMap<WizardId, OnboardingWizard>>,
    fail_writes: bool,
    yield_after_read: bool,
}

impl MockWizardRepository {
    pub fn new() -> Self {
        Self {
            wizards: Mutex::new(HashMap::new()),
            fail_writes: false,
            yield_after_read: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            wizards: Mutex::new(HashMap::new()),
            fail_writes: true,
            yield_after_read: false,
        }
    }

    pub fn with(wizard: OnboardingWizard) -> Self {
        let repo = Self::new();
        repo.wizards.lock().unwrap().insert(wizard.id(), wizard);
        repo
    }

    /// Like `with`, but every read hands control back to the scheduler
    /// before returning, widening the window between load and store.
    pub fn interleaving(wizard: OnboardingWizard) -> Self {
        let mut repo = Self::with(wizard);
        repo.yield_after_read = true;
        repo
    }

    pub fn get(&self, id: &WizardId) -> Option<OnboardingWizard> {
        self.wizards.lock().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.wizards.lock().unwrap().len()
    }

    fn check_writable(&self) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                "Simulated storage failure",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl WizardRepository for MockWizardRepository {
    async fn save(&self, wizard: &OnboardingWizard) -> Result<(), DomainError> {
        self.check_writable()?;
        self.wizards
            .lock()
            .unwrap()
            .insert(wizard.id(), wizard.clone());
        Ok(())
    }

    async fn update(&self, wizard: &OnboardingWizard) -> Result<(), DomainError> {
        self.save(wizard).await
    }

    async fn find_by_id(&self, id: &WizardId) -> Result<Option<OnboardingWizard>, DomainError> {
        let found = self.get(id);
        if self.yield_after_read {
            tokio::task::yield_now().await;
        }
        Ok(found)
    }

    async fn delete(&self, id: &WizardId) -> Result<(), DomainError> {
        self.check_writable()?;
        self.wizards.lock().unwrap().remove(id);
        Ok(())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.len())
    }
}

pub struct MockEventPublisher {
    published_events: Mutex<Vec<EventEnvelope>>,
}

impl MockEventPublisher {
    pub fn new() -> Self {
        Self {
            published_events: Mutex::new(Vec::new()),
        }
    }

    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published_events.lock().unwrap().clone()
    }

    pub fn event_types(&self) -> Vec<String> {
        self.published_events()
            .into_iter()
            .map(|e| e.event_type)
            .collect()
    }
}

#[async_trait]
impl EventPublisher for MockEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.published_events.lock().unwrap().push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

pub fn valid_profile_edits() -> Vec<ProfileEdit> {
    vec![
        ProfileEdit::SetFullName("Grace Author".into()),
        ProfileEdit::SetEmail("grace@example.org".into()),
        ProfileEdit::SetBio(
            "Science journalist covering climate, energy and the people behind them.".into(),
        ),
        ProfileEdit::SetExpertise {
            area: ExpertiseArea::Science,
            selected: true,
        },
        ProfileEdit::AttachSample {
            file_name: "feature.docx".into(),
            size_bytes: 40_000,
        },
    ]
}

/// A wizard driven forward to `step` through its public operations.
pub fn wizard_at(step: OnboardingStep) -> OnboardingWizard {
    let mut wizard = OnboardingWizard::start(WizardId::new(), SampleLimits::default());
    if step == OnboardingStep::Profile {
        return wizard;
    }
    for edit in valid_profile_edits() {
        wizard.edit_profile(edit).unwrap();
    }
    wizard.next();
    if step == OnboardingStep::Tutorial {
        return wizard;
    }
    wizard.select_tab(TutorialTab::Quiz).unwrap();
    wizard.start_quiz().unwrap();
    for (q, a) in [("q1", "c"), ("q2", "b"), ("q3", "c")] {
        wizard.answer_question(q, a).unwrap();
    }
    wizard.submit_quiz().unwrap();
    wizard.next();
    if step == OnboardingStep::Preview {
        return wizard;
    }
    wizard.next();
    wizard
}

/// A wizard on the checklist with every task ticked.
pub fn ready_to_complete() -> OnboardingWizard {
    let mut wizard = wizard_at(OnboardingStep::Checklist);
    for id in 1..=3 {
        wizard.toggle_task(id).unwrap();
    }
    wizard
}
