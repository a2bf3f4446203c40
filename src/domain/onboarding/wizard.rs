//! OnboardingWizard aggregate - the step machine.
//!
//! Sequences profile → tutorial → preview → checklist and owns the state of
//! each step. Unmet gates are reported as [`StepOutcome::Blocked`]; only
//! misuse (wrong step, completed wizard, bad input) is an error.

use crate::domain::checklist::WelcomeChecklist;
use crate::domain::foundation::{Percentage, StateMachine, Timestamp, WizardId};
use crate::domain::profile::{
    FieldErrors, ProfileData, ProfileEdit, ProfileForm, SampleLimits, StageMove,
};
use crate::domain::tutorial::{QuizScore, TutorialSession, TutorialTab};

use super::{OnboardingError, OnboardingStatus, OnboardingStep};

/// The condition that kept `next()` from advancing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Profile has invalid fields.
    ProfileInvalid(FieldErrors),
    /// Quiz not yet passed.
    QuizNotPassed,
    /// At least one checklist task is open.
    ChecklistIncomplete,
}

impl Gate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gate::ProfileInvalid(_) => "profile_invalid",
            Gate::QuizNotPassed => "quiz_not_passed",
            Gate::ChecklistIncomplete => "checklist_incomplete",
        }
    }
}

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Moved {
        from: OnboardingStep,
        to: OnboardingStep,
    },
    /// Gate unmet; state unchanged.
    Blocked(Gate),
    /// `previous()` on the first step; the host leaves onboarding.
    Exited,
    /// The one-time completion signal.
    Completed(ProfileData),
    /// Wizard finished earlier; nothing happened.
    AlreadyComplete,
}

/// One onboarding session.
///
/// # Invariants
///
/// - `step` only moves one position at a time
/// - `profile` is set whenever `step` is past `Profile`
/// - `completed_at` is set iff `status` is `Completed`
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingWizard {
    id: WizardId,
    step: OnboardingStep,
    status: OnboardingStatus,
    profile_form: ProfileForm,
    profile: Option<ProfileData>,
    tutorial: TutorialSession,
    checklist: WelcomeChecklist,
    started_at: Timestamp,
    completed_at: Option<Timestamp>,
}

impl OnboardingWizard {
    /// Starts a wizard on the profile step.
    pub fn start(id: WizardId, limits: SampleLimits) -> Self {
        Self {
            id,
            step: OnboardingStep::Profile,
            status: OnboardingStatus::InProgress,
            profile_form: ProfileForm::new(limits),
            profile: None,
            tutorial: TutorialSession::new(),
            checklist: WelcomeChecklist::new(),
            started_at: Timestamp::now(),
            completed_at: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> WizardId {
        self.id
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn status(&self) -> OnboardingStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status == OnboardingStatus::Completed
    }

    /// Progress bar value; 100 once complete.
    pub fn progress(&self) -> Percentage {
        if self.is_complete() {
            Percentage::HUNDRED
        } else {
            self.step.progress()
        }
    }

    pub fn profile_form(&self) -> &ProfileForm {
        &self.profile_form
    }

    /// The profile accepted when leaving the profile step.
    pub fn profile(&self) -> Option<&ProfileData> {
        self.profile.as_ref()
    }

    pub fn tutorial(&self) -> &TutorialSession {
        &self.tutorial
    }

    pub fn checklist(&self) -> &WelcomeChecklist {
        &self.checklist
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<Timestamp> {
        self.completed_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Advances one step if the current step's gate holds.
    ///
    /// On the checklist step a successful `next()` completes onboarding.
    pub fn next(&mut self) -> StepOutcome {
        if self.is_complete() {
            return StepOutcome::AlreadyComplete;
        }

        match self.step {
            OnboardingStep::Profile => match self.profile_form.submit() {
                Ok(profile) => {
                    self.profile = Some(profile);
                    self.move_to(OnboardingStep::Tutorial)
                }
                Err(errors) => StepOutcome::Blocked(Gate::ProfileInvalid(errors)),
            },
            OnboardingStep::Tutorial => {
                if self.tutorial.is_passed() {
                    self.move_to(OnboardingStep::Preview)
                } else {
                    StepOutcome::Blocked(Gate::QuizNotPassed)
                }
            }
            OnboardingStep::Preview => self.move_to(OnboardingStep::Checklist),
            OnboardingStep::Checklist => self.finish(),
        }
    }

    /// Moves back one step without re-checking gates.
    pub fn previous(&mut self) -> StepOutcome {
        if self.is_complete() {
            return StepOutcome::AlreadyComplete;
        }
        match self.step.previous() {
            Some(to) => self.move_to(to),
            None => StepOutcome::Exited,
        }
    }

    /// Explicit completion from the checklist step.
    ///
    /// # Errors
    ///
    /// - `WrongStep` if the wizard is not on the checklist
    pub fn complete(&mut self) -> Result<StepOutcome, OnboardingError> {
        if self.is_complete() {
            return Ok(StepOutcome::AlreadyComplete);
        }
        if self.step != OnboardingStep::Checklist {
            return Err(OnboardingError::wrong_step(
                OnboardingStep::Checklist,
                self.step,
            ));
        }
        Ok(self.finish())
    }

    fn move_to(&mut self, to: OnboardingStep) -> StepOutcome {
        let from = self.step;
        self.step = to;
        StepOutcome::Moved { from, to }
    }

    fn finish(&mut self) -> StepOutcome {
        if !self.checklist.all_completed() {
            return StepOutcome::Blocked(Gate::ChecklistIncomplete);
        }
        let profile = match self.profile.clone() {
            Some(profile) => profile,
            None => match self.profile_form.submit() {
                Ok(profile) => profile,
                Err(errors) => return StepOutcome::Blocked(Gate::ProfileInvalid(errors)),
            },
        };
        match self.status.transition_to(OnboardingStatus::Completed) {
            Ok(status) => {
                self.status = status;
                self.completed_at = Some(Timestamp::now());
                StepOutcome::Completed(profile)
            }
            Err(_) => StepOutcome::AlreadyComplete,
        }
    }

    fn ensure_on(&self, expected: OnboardingStep) -> Result<(), OnboardingError> {
        if self.is_complete() {
            return Err(OnboardingError::AlreadyCompleted);
        }
        if self.step != expected {
            return Err(OnboardingError::wrong_step(expected, self.step));
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Profile step
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies an edit and returns the refreshed error map.
    pub fn edit_profile(&mut self, edit: ProfileEdit) -> Result<FieldErrors, OnboardingError> {
        self.ensure_on(OnboardingStep::Profile)?;
        let errors = self.profile_form.apply(edit)?;
        Ok(errors.clone())
    }

    pub fn next_profile_stage(&mut self) -> Result<StageMove, OnboardingError> {
        self.ensure_on(OnboardingStep::Profile)?;
        Ok(self.profile_form.advance_stage())
    }

    pub fn previous_profile_stage(&mut self) -> Result<StageMove, OnboardingError> {
        self.ensure_on(OnboardingStep::Profile)?;
        Ok(self.profile_form.back_stage())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tutorial step
    // ─────────────────────────────────────────────────────────────────────────

    pub fn select_tab(&mut self, tab: TutorialTab) -> Result<Percentage, OnboardingError> {
        self.ensure_on(OnboardingStep::Tutorial)?;
        Ok(self.tutorial.select_tab(tab))
    }

    pub fn next_tab(&mut self) -> Result<bool, OnboardingError> {
        self.ensure_on(OnboardingStep::Tutorial)?;
        Ok(self.tutorial.next_tab())
    }

    pub fn previous_tab(&mut self) -> Result<bool, OnboardingError> {
        self.ensure_on(OnboardingStep::Tutorial)?;
        Ok(self.tutorial.previous_tab())
    }

    pub fn start_quiz(&mut self) -> Result<(), OnboardingError> {
        self.ensure_on(OnboardingStep::Tutorial)?;
        Ok(self.tutorial.start_quiz()?)
    }

    pub fn answer_question(&mut self, question_id: &str, option: &str) -> Result<(), OnboardingError> {
        self.ensure_on(OnboardingStep::Tutorial)?;
        Ok(self.tutorial.answer(question_id, option)?)
    }

    pub fn submit_quiz(&mut self) -> Result<QuizScore, OnboardingError> {
        self.ensure_on(OnboardingStep::Tutorial)?;
        Ok(self.tutorial.submit()?)
    }

    pub fn retry_quiz(&mut self) -> Result<(), OnboardingError> {
        self.ensure_on(OnboardingStep::Tutorial)?;
        Ok(self.tutorial.retry()?)
    }

    pub fn review_material(&mut self) -> Result<(), OnboardingError> {
        self.ensure_on(OnboardingStep::Tutorial)?;
        Ok(self.tutorial.review_material()?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Checklist step
    // ─────────────────────────────────────────────────────────────────────────

    /// Flips a checklist task; returns its new state.
    pub fn toggle_task(&mut self, task_id: u8) -> Result<bool, OnboardingError> {
        self.ensure_on(OnboardingStep::Checklist)?;
        Ok(self.checklist.toggle(task_id)?)
    }
}
