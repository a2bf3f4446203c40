//! Comprehension quiz: question bank types, answers, scoring and phase.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Minimum percentage that counts as a pass.
pub const PASS_THRESHOLD: f64 = 70.0;

/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub value: String,
    pub label: String,
}

/// Static multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuizOption>,
    pub correct_answer: String,
}

impl QuizQuestion {
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

/// Chosen option per question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizAnswers(BTreeMap<String, String>);

impl QuizAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer after checking it against the question bank.
    ///
    /// # Errors
    ///
    /// - `UnknownValue` for an unknown question or an option the question
    ///   does not offer
    pub fn select(
        &mut self,
        questions: &[QuizQuestion],
        question_id: &str,
        option: &str,
    ) -> Result<(), ValidationError> {
        let question = questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or_else(|| ValidationError::unknown_value("question_id", question_id))?;
        if !question.has_option(option) {
            return Err(ValidationError::unknown_value(
                format!("answers.{}", question_id),
                option,
            ));
        }
        self.0.insert(question_id.to_string(), option.to_string());
        Ok(())
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QuizAnswers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Outcome of scoring an answer set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
    /// Unrounded percentage in [0, 100].
    pub percentage: f64,
}

impl QuizScore {
    pub fn passed(&self) -> bool {
        self.percentage >= PASS_THRESHOLD
    }

    /// Percentage rounded to two decimals for display.
    pub fn rounded(&self) -> f64 {
        (self.percentage * 100.0).round() / 100.0
    }
}

/// Scores `answers` against `questions`.
///
/// An empty question bank scores zero.
pub fn score(answers: &QuizAnswers, questions: &[QuizQuestion]) -> QuizScore {
    let total = questions.len();
    let correct = questions
        .iter()
        .filter(|q| answers.get(&q.id) == Some(q.correct_answer.as_str()))
        .count();
    let percentage = if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64 * 100.0
    };
    QuizScore {
        correct,
        total,
        percentage,
    }
}

/// True when every question has a selected answer.
pub fn all_answered(answers: &QuizAnswers, questions: &[QuizQuestion]) -> bool {
    questions.iter().all(|q| answers.get(&q.id).is_some())
}

/// Quiz lifecycle inside the quiz tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    #[default]
    NotStarted,
    InProgress,
    Submitted,
}

impl StateMachine for QuizPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use QuizPhase::*;
        matches!(
            (self, target),
            (NotStarted, InProgress) | (InProgress, Submitted) | (Submitted, InProgress)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use QuizPhase::*;
        match self {
            NotStarted => vec![InProgress],
            InProgress => vec![Submitted],
            Submitted => vec![InProgress],
        }
    }
}
