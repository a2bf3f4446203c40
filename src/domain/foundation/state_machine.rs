//! State machine trait for lifecycle enums.
//!
//! Gives the onboarding status and the quiz phase one consistent way to
//! validate and perform transitions.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors define valid transitions and get validated transition
/// methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for QuizPhase {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!(
///             (self, target),
///             (NotStarted, InProgress) | (InProgress, Submitted) | (Submitted, InProgress)
///         )
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             NotStarted => vec![InProgress],
///             InProgress => vec![Submitted],
///             Submitted => vec![InProgress],
///         }
///     }
/// }
///
/// let phase = phase.transition_to(QuizPhase::Submitted)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Door {
        Closed,
        Open,
        Welded,
    }

    impl StateMachine for Door {
        fn can_transition_to(&self, target: &Self) -> bool {
            self.valid_transitions().contains(target)
        }

        fn valid_transitions(&self) -> Vec<Self> {
            match self {
                Door::Closed => vec![Door::Open, Door::Welded],
                Door::Open => vec![Door::Closed],
                Door::Welded => vec![],
            }
        }
    }

    #[test]
    fn transition_to_accepts_listed_target() {
        assert_eq!(Door::Closed.transition_to(Door::Open), Ok(Door::Open));
    }

    #[test]
    fn transition_to_rejects_unlisted_target() {
        let err = Door::Open.transition_to(Door::Welded).unwrap_err();
        assert_eq!(err.field(), "state_transition");
    }

    #[test]
    fn terminal_state_has_no_transitions() {
        assert!(Door::Welded.is_terminal());
        assert!(!Door::Closed.is_terminal());
    }
}
