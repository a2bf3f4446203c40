//! Onboarding-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError, WizardId};
use crate::domain::tutorial::TutorialError;

use super::OnboardingStep;

/// Errors raised by wizard operations and their handlers.
///
/// Unmet step gates are not errors; see `StepOutcome::Blocked`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingError {
    /// Wizard was not found (never started, exited or completed).
    NotFound(WizardId),
    /// Operation belongs to another step.
    WrongStep {
        expected: OnboardingStep,
        actual: OnboardingStep,
    },
    /// Wizard already completed.
    AlreadyCompleted,
    /// Input rejected.
    InvalidInput { field: String, message: String },
    /// Quiz action not allowed in the current quiz phase.
    InvalidQuizPhase(String),
    /// Quiz submitted with unanswered questions.
    QuizIncomplete { answered: usize, total: usize },
    /// Infrastructure error.
    Infrastructure(String),
}

impl OnboardingError {
    pub fn not_found(id: WizardId) -> Self {
        OnboardingError::NotFound(id)
    }
    pub fn wrong_step(expected: OnboardingStep, actual: OnboardingStep) -> Self {
        OnboardingError::WrongStep { expected, actual }
    }
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        OnboardingError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        OnboardingError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            OnboardingError::NotFound(_) => ErrorCode::WizardNotFound,
            OnboardingError::WrongStep { .. } => ErrorCode::WrongStep,
            OnboardingError::AlreadyCompleted => ErrorCode::OnboardingCompleted,
            OnboardingError::InvalidInput { .. } => ErrorCode::ValidationFailed,
            OnboardingError::InvalidQuizPhase(_) => ErrorCode::InvalidStateTransition,
            OnboardingError::QuizIncomplete { .. } => ErrorCode::QuizIncomplete,
            OnboardingError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            OnboardingError::NotFound(id) => format!("Onboarding wizard not found: {}", id),
            OnboardingError::WrongStep { expected, actual } => format!(
                "Operation requires the {} step, wizard is on {}",
                expected, actual
            ),
            OnboardingError::AlreadyCompleted => "Onboarding is already complete".to_string(),
            OnboardingError::InvalidInput { field, message } => {
                format!("Invalid input for '{}': {}", field, message)
            }
            OnboardingError::InvalidQuizPhase(msg) => msg.clone(),
            OnboardingError::QuizIncomplete { answered, total } => format!(
                "Answer all questions before submitting ({} of {} answered)",
                answered, total
            ),
            OnboardingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for OnboardingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for OnboardingError {}

impl From<DomainError> for OnboardingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::OnboardingCompleted => OnboardingError::AlreadyCompleted,
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => OnboardingError::InvalidInput {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => OnboardingError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for OnboardingError {
    fn from(err: ValidationError) -> Self {
        OnboardingError::InvalidInput {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<TutorialError> for OnboardingError {
    fn from(err: TutorialError) -> Self {
        match err {
            TutorialError::Incomplete { answered, total } => {
                OnboardingError::QuizIncomplete { answered, total }
            }
            TutorialError::Invalid(v) => v.into(),
            other => OnboardingError::InvalidQuizPhase(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_per_variant() {
        assert_eq!(
            OnboardingError::not_found(WizardId::new()).code(),
            ErrorCode::WizardNotFound
        );
        assert_eq!(
            OnboardingError::wrong_step(OnboardingStep::Tutorial, OnboardingStep::Profile).code(),
            ErrorCode::WrongStep
        );
        assert_eq!(
            OnboardingError::AlreadyCompleted.code(),
            ErrorCode::OnboardingCompleted
        );
    }

    #[test]
    fn wrong_step_message_names_both_steps() {
        let err = OnboardingError::wrong_step(OnboardingStep::Checklist, OnboardingStep::Preview);
        assert_eq!(
            err.to_string(),
            "Operation requires the checklist step, wizard is on preview"
        );
    }

    #[test]
    fn validation_error_keeps_field() {
        let err: OnboardingError = ValidationError::unknown_value("task_id", "9").into();
        assert!(matches!(
            err,
            OnboardingError::InvalidInput { ref field, .. } if field == "task_id"
        ));
    }

    #[test]
    fn tutorial_errors_convert() {
        let incomplete: OnboardingError = TutorialError::Incomplete {
            answered: 2,
            total: 3,
        }
        .into();
        assert_eq!(
            incomplete,
            OnboardingError::QuizIncomplete {
                answered: 2,
                total: 3
            }
        );

        let phase: OnboardingError = TutorialError::AlreadyPassed.into();
        assert_eq!(phase.code(), ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn domain_storage_error_becomes_infrastructure() {
        let err: OnboardingError =
            DomainError::new(ErrorCode::StorageError, "lock poisoned").into();
        assert!(matches!(err, OnboardingError::Infrastructure(_)));
    }

    #[test]
    fn domain_validation_error_reads_field_detail() {
        let err: OnboardingError = DomainError::validation("email", "bad").into();
        assert_eq!(err, OnboardingError::invalid_input("email", "bad"));
    }
}
