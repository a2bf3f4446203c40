//! TutorialSession - tab/progress controller plus the quiz state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{Percentage, StateMachine, ValidationError};

use super::{all_answered, score, tutorial_content, QuizAnswers, QuizPhase, QuizScore, TutorialTab};

/// Rejected tutorial actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TutorialError {
    #[error("The quiz can only be started from the quiz tab")]
    QuizTabInactive,

    #[error("Cannot {action} while the quiz is {phase:?}")]
    InvalidPhase { action: &'static str, phase: QuizPhase },

    #[error("Answer all questions before submitting ({answered} of {total} answered)")]
    Incomplete { answered: usize, total: usize },

    #[error("The quiz has already been passed")]
    AlreadyPassed,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// State of the tutorial step.
///
/// The active tab and the quiz phase move independently: leaving the quiz
/// tab does not reset a quiz in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorialSession {
    active_tab: TutorialTab,
    phase: QuizPhase,
    answers: QuizAnswers,
    last_score: Option<QuizScore>,
}

impl Default for TutorialSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TutorialSession {
    pub fn new() -> Self {
        Self {
            active_tab: TutorialTab::default(),
            phase: QuizPhase::default(),
            answers: QuizAnswers::new(),
            last_score: None,
        }
    }

    pub fn active_tab(&self) -> TutorialTab {
        self.active_tab
    }

    /// Progress always follows the active tab.
    pub fn progress(&self) -> Percentage {
        self.active_tab.progress()
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    /// Score of the current submission, if the quiz is submitted.
    pub fn last_score(&self) -> Option<QuizScore> {
        self.last_score
    }

    /// True once a submitted attempt reached the pass threshold.
    pub fn is_passed(&self) -> bool {
        self.phase == QuizPhase::Submitted && self.last_score.is_some_and(|s| s.passed())
    }

    /// True when every question has an answer.
    pub fn all_answered(&self) -> bool {
        all_answered(&self.answers, &tutorial_content().questions)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tabs
    // ─────────────────────────────────────────────────────────────────────

    /// Activates `tab`; reselecting the active tab changes nothing.
    pub fn select_tab(&mut self, tab: TutorialTab) -> Percentage {
        self.active_tab = tab;
        self.progress()
    }

    /// Moves one tab forward. Returns false on the last tab.
    pub fn next_tab(&mut self) -> bool {
        match self.active_tab.next() {
            Some(tab) => {
                self.active_tab = tab;
                true
            }
            None => false,
        }
    }

    /// Moves one tab back. Returns false on the first tab.
    pub fn previous_tab(&mut self) -> bool {
        match self.active_tab.previous() {
            Some(tab) => {
                self.active_tab = tab;
                true
            }
            None => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Quiz
    // ─────────────────────────────────────────────────────────────────────

    pub fn start_quiz(&mut self) -> Result<(), TutorialError> {
        if self.active_tab != TutorialTab::Quiz {
            return Err(TutorialError::QuizTabInactive);
        }
        self.move_phase("start the quiz", QuizPhase::InProgress)
    }

    pub fn answer(&mut self, question_id: &str, option: &str) -> Result<(), TutorialError> {
        if self.phase != QuizPhase::InProgress {
            return Err(TutorialError::InvalidPhase {
                action: "answer",
                phase: self.phase,
            });
        }
        self.answers
            .select(&tutorial_content().questions, question_id, option)?;
        Ok(())
    }

    /// Scores the attempt. Requires every question answered.
    pub fn submit(&mut self) -> Result<QuizScore, TutorialError> {
        if self.phase != QuizPhase::InProgress {
            return Err(TutorialError::InvalidPhase {
                action: "submit",
                phase: self.phase,
            });
        }
        let questions = &tutorial_content().questions;
        if !all_answered(&self.answers, questions) {
            return Err(TutorialError::Incomplete {
                answered: self.answers.len(),
                total: questions.len(),
            });
        }

        let result = score(&self.answers, questions);
        self.move_phase("submit", QuizPhase::Submitted)?;
        self.last_score = Some(result);
        Ok(result)
    }

    /// Clears all answers and reopens the quiz after a failed attempt.
    pub fn retry(&mut self) -> Result<(), TutorialError> {
        self.reopen("retry")?;
        self.answers.clear();
        Ok(())
    }

    /// Returns to the first tab after a failed attempt, keeping answers.
    pub fn review_material(&mut self) -> Result<(), TutorialError> {
        self.reopen("review material")?;
        self.active_tab = TutorialTab::Guidelines;
        Ok(())
    }

    fn reopen(&mut self, action: &'static str) -> Result<(), TutorialError> {
        if self.is_passed() {
            return Err(TutorialError::AlreadyPassed);
        }
        self.move_phase(action, QuizPhase::InProgress)?;
        self.last_score = None;
        Ok(())
    }

    fn move_phase(&mut self, action: &'static str, target: QuizPhase) -> Result<(), TutorialError> {
        self.phase = self
            .phase
            .transition_to(target)
            .map_err(|_| TutorialError::InvalidPhase {
                action,
                phase: self.phase,
            })?;
        Ok(())
    }
}
