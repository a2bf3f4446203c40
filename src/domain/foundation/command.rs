//! CommandMetadata - context that flows through command handlers.
//!
//! Handlers take one metadata value instead of loose correlation and
//! source parameters, and copy the correlation id onto every event they
//! publish.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata context for command handlers.
///
/// # Example
///
/// ```ignore
/// let envelope = event
///     .to_envelope()?
///     .with_correlation_id(metadata.correlation_id());
/// publisher.publish(envelope).await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Links the events raised by one host request.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Where the command came from ("http", "test", ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if not set.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the correlation ID only if explicitly set.
    pub fn correlation_id_opt(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
impl CommandMetadata {
    /// Test fixture with a fixed correlation id.
    pub fn test_fixture() -> Self {
        Self::new()
            .with_correlation_id("test-correlation-id")
            .with_source("test")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let metadata = CommandMetadata::new()
            .with_correlation_id("corr-123")
            .with_source("http");

        assert_eq!(metadata.correlation_id_opt(), Some("corr-123"));
        assert_eq!(metadata.correlation_id(), "corr-123");
        assert_eq!(metadata.source(), Some("http"));
    }

    #[test]
    fn correlation_id_generates_if_missing() {
        let metadata = CommandMetadata::new();
        assert!(metadata.correlation_id_opt().is_none());
        assert!(Uuid::parse_str(&metadata.correlation_id()).is_ok());
    }

    #[test]
    fn skips_absent_fields_when_serialized() {
        let json = serde_json::to_string(&CommandMetadata::new()).unwrap();
        assert_eq!(json, "{}");
    }
}
