//! Onboarding domain events.
//!
//! - `OnboardingStarted` - wizard created
//! - `StepChanged` - wizard moved to another step
//! - `QuizSubmitted` - a quiz attempt was scored
//! - `OnboardingExited` - writer left from the first step
//! - `OnboardingCompleted` - final signal, carries the profile

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, Timestamp, WizardId};
use crate::domain::profile::ProfileData;

use super::OnboardingStep;

// ════════════════════════════════════════════════════════════════════════════
// OnboardingStarted
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingStarted {
    pub event_id: EventId,
    pub wizard_id: WizardId,
    pub started_at: Timestamp,
}

domain_event!(
    OnboardingStarted,
    event_type = "onboarding.started.v1",
    aggregate_id = wizard_id,
    aggregate_type = "OnboardingWizard",
    occurred_at = started_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// StepChanged
// ════════════════════════════════════════════════════════════════════════════

/// Published on every forward or backward step move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepChanged {
    pub event_id: EventId,
    pub wizard_id: WizardId,
    pub from: OnboardingStep,
    pub to: OnboardingStep,
    pub changed_at: Timestamp,
}

domain_event!(
    StepChanged,
    event_type = "onboarding.step_changed.v1",
    aggregate_id = wizard_id,
    aggregate_type = "OnboardingWizard",
    occurred_at = changed_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// QuizSubmitted
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSubmitted {
    pub event_id: EventId,
    pub wizard_id: WizardId,
    pub correct: usize,
    pub total: usize,
    /// Rounded to two decimals.
    pub percentage: f64,
    pub passed: bool,
    pub submitted_at: Timestamp,
}

domain_event!(
    QuizSubmitted,
    event_type = "onboarding.quiz_submitted.v1",
    aggregate_id = wizard_id,
    aggregate_type = "OnboardingWizard",
    occurred_at = submitted_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// OnboardingExited
// ════════════════════════════════════════════════════════════════════════════

/// Published when the writer backs out of the profile step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingExited {
    pub event_id: EventId,
    pub wizard_id: WizardId,
    pub exited_at: Timestamp,
}

domain_event!(
    OnboardingExited,
    event_type = "onboarding.exited.v1",
    aggregate_id = wizard_id,
    aggregate_type = "OnboardingWizard",
    occurred_at = exited_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// OnboardingCompleted
// ════════════════════════════════════════════════════════════════════════════

/// Published exactly once per wizard, when the checklist is finished.
///
/// Subscribers receive the finalized profile; where it goes is their concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingCompleted {
    pub event_id: EventId,
    pub wizard_id: WizardId,
    pub profile: ProfileData,
    pub started_at: Timestamp,
    pub completed_at: Timestamp,
}

domain_event!(
    OnboardingCompleted,
    event_type = "onboarding.completed.v1",
    aggregate_id = wizard_id,
    aggregate_type = "OnboardingWizard",
    occurred_at = completed_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, SerializableDomainEvent};

    #[test]
    fn started_implements_domain_event() {
        let event = OnboardingStarted {
            event_id: EventId::new(),
            wizard_id: WizardId::new(),
            started_at: Timestamp::now(),
        };

        assert_eq!(event.event_type(), "onboarding.started.v1");
        assert_eq!(event.aggregate_type(), "OnboardingWizard");
        assert_eq!(event.aggregate_id(), event.wizard_id.to_string());
    }

    #[test]
    fn step_changed_envelope_carries_version_and_steps() {
        let event = StepChanged {
            event_id: EventId::from_string("evt-7"),
            wizard_id: WizardId::new(),
            from: OnboardingStep::Tutorial,
            to: OnboardingStep::Preview,
            changed_at: Timestamp::now(),
        };

        let envelope = event.to_envelope().unwrap();
        assert_eq!(envelope.event_type, "onboarding.step_changed.v1");
        assert_eq!(envelope.schema_version, 1);
        assert_eq!(envelope.event_id.as_str(), "evt-7");
        assert_eq!(envelope.payload["from"], "tutorial");
        assert_eq!(envelope.payload["to"], "preview");
    }

    #[test]
    fn quiz_submitted_round_trips_through_envelope() {
        let event = QuizSubmitted {
            event_id: EventId::new(),
            wizard_id: WizardId::new(),
            correct: 2,
            total: 3,
            percentage: 66.67,
            passed: false,
            submitted_at: Timestamp::now(),
        };

        let restored: QuizSubmitted = event.to_envelope().unwrap().payload_as().unwrap();
        assert_eq!(restored.correct, 2);
        assert!(!restored.passed);
    }
}
