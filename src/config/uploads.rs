//! Writing sample upload limits

use serde::Deserialize;

use crate::domain::profile::{SampleLimits, DEFAULT_MAX_SAMPLE_BYTES};

use super::error::ValidationError;

/// Limits applied to writing samples attached during profile setup.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    #[serde(default = "default_max_sample_bytes")]
    pub max_sample_bytes: u64,

    /// Allowed extensions (comma-separated, without dots)
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: String,
}

impl UploadConfig {
    pub fn extensions_list(&self) -> Vec<String> {
        self.allowed_extensions
            .split(',')
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect()
    }

    pub fn sample_limits(&self) -> SampleLimits {
        SampleLimits {
            max_bytes: self.max_sample_bytes,
            allowed_extensions: self.extensions_list(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_sample_bytes == 0 {
            return Err(ValidationError::InvalidMaxSampleSize);
        }
        let extensions = self.extensions_list();
        if extensions.is_empty() {
            return Err(ValidationError::NoAllowedExtensions);
        }
        if let Some(bad) = extensions
            .iter()
            .find(|e| !e.chars().all(|c| c.is_ascii_alphanumeric()))
        {
            return Err(ValidationError::InvalidExtension(bad.clone()));
        }
        Ok(())
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_sample_bytes: default_max_sample_bytes(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

fn default_max_sample_bytes() -> u64 {
    DEFAULT_MAX_SAMPLE_BYTES
}

fn default_allowed_extensions() -> String {
    "pdf,doc,docx".to_string()
}
