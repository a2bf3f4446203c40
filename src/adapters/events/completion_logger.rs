//! CompletionLogger - logs the completed profile.
//!
//! The only subscriber the binary wires up for `onboarding.completed.v1`.
//! Nothing is stored; the event is the hand-off point for any future
//! destination.

use async_trait::async_trait;
use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::domain::onboarding::OnboardingCompleted;
use crate::ports::EventHandler;

/// Event type this handler expects.
pub const COMPLETED_EVENT: &str = "onboarding.completed.v1";

#[derive(Debug, Default)]
pub struct CompletionLogger;

impl CompletionLogger {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventHandler for CompletionLogger {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let completed: OnboardingCompleted = event.payload_as().map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Malformed {} payload: {}", COMPLETED_EVENT, e),
            )
        })?;

        let expertise: Vec<&str> = completed.profile.expertise.iter().map(|a| a.id()).collect();
        info!(
            wizard_id = %completed.wizard_id,
            correlation_id = event.metadata.correlation_id.as_deref().unwrap_or("-"),
            writer = %completed.profile.full_name,
            email = %completed.profile.email,
            expertise = ?expertise,
            samples = completed.profile.writing_samples.len(),
            duration_secs = completed
                .completed_at
                .duration_since(&completed.started_at)
                .num_seconds(),
            "Writer onboarding completed"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "CompletionLogger"
    }
}
