//! TutorialActionHandler - Command handler for tutorial tabs and the quiz.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{CommandMetadata, EventId, SerializableDomainEvent, Timestamp, WizardId};
use crate::domain::onboarding::{OnboardingError, OnboardingWizard, QuizSubmitted};
use crate::domain::tutorial::{QuizScore, TutorialTab};
use crate::ports::{EventPublisher, WizardRepository};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TutorialAction {
    SelectTab(TutorialTab),
    NextTab,
    PreviousTab,
    StartQuiz,
    Answer { question_id: String, option: String },
    SubmitQuiz,
    RetryQuiz,
    ReviewMaterial,
}

#[derive(Debug, Clone)]
pub struct TutorialActionCommand {
    pub wizard_id: WizardId,
    pub action: TutorialAction,
}

#[derive(Debug, Clone)]
pub struct TutorialActionResult {
    pub wizard: OnboardingWizard,
    /// Set only for `SubmitQuiz`.
    pub score: Option<QuizScore>,
}

pub struct TutorialActionHandler {
    repository: Arc<dyn WizardRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl TutorialActionHandler {
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
        cmd: TutorialActionCommand,
        metadata: CommandMetadata,
    ) -> Result<TutorialActionResult, OnboardingError> {
        let _guard = super::lock_wizard(cmd.wizard_id).await;
        let mut wizard = super::load_wizard(self.repository.as_ref(), cmd.wizard_id).await?;

        let mut score = None;
        match cmd.action {
            TutorialAction::SelectTab(tab) => {
                wizard.select_tab(tab)?;
            }
            TutorialAction::NextTab => {
                wizard.next_tab()?;
            }
            TutorialAction::PreviousTab => {
                wizard.previous_tab()?;
            }
            TutorialAction::StartQuiz => wizard.start_quiz()?,
            TutorialAction::Answer {
                question_id,
                option,
            } => wizard.answer_question(&question_id, &option)?,
            TutorialAction::SubmitQuiz => score = Some(wizard.submit_quiz()?),
            TutorialAction::RetryQuiz => wizard.retry_quiz()?,
            TutorialAction::ReviewMaterial => wizard.review_material()?,
        }

        self.repository.update(&wizard).await?;

        if let Some(result) = score {
            let event = QuizSubmitted {
                event_id: EventId::new(),
                wizard_id: wizard.id(),
                correct: result.correct,
                total: result.total,
                percentage: result.rounded(),
                passed: result.passed(),
                submitted_at: Timestamp::now(),
            };
            let envelope = event
                .to_envelope()?
                .with_correlation_id(metadata.correlation_id());
            self.event_publisher.publish(envelope).await?;

            info!(
                wizard_id = %wizard.id(),
                score = result.rounded(),
                passed = result.passed(),
                "Quiz submitted"
            );
        }

        Ok(TutorialActionResult { wizard, score })
    }
}
