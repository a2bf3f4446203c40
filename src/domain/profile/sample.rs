//! Writing sample references and the limits applied when attaching them.
//!
//! Samples are metadata only. File bytes never reach this crate; the host
//! keeps the upload and hands over name and size.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SampleId, ValidationError};

const FIELD: &str = "writingSamples";

/// Ten mebibytes, the default per-file ceiling.
pub const DEFAULT_MAX_SAMPLE_BYTES: u64 = 10 * 1024 * 1024;

/// Constraints applied to each attached sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleLimits {
    pub max_bytes: u64,
    /// Lowercase extensions without the leading dot.
    pub allowed_extensions: Vec<String>,
}

impl Default for SampleLimits {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_SAMPLE_BYTES,
            allowed_extensions: vec!["pdf".to_string(), "doc".to_string(), "docx".to_string()],
        }
    }
}

impl SampleLimits {
    fn accepts_extension(&self, file_name: &str) -> bool {
        match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => {
                let ext = ext.to_ascii_lowercase();
                self.allowed_extensions.iter().any(|allowed| *allowed == ext)
            }
            _ => false,
        }
    }

    fn extensions_label(&self) -> String {
        self.allowed_extensions
            .iter()
            .map(|e| e.to_ascii_uppercase())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// An uploaded writing sample, referenced by name and size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingSample {
    pub id: SampleId,
    pub file_name: String,
    pub size_bytes: u64,
}

impl WritingSample {
    /// Accepts a sample if it satisfies `limits`.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the file name is blank
    /// - `InvalidFormat` for a disallowed extension, an empty file or an
    ///   oversized file
    pub fn new(
        file_name: impl Into<String>,
        size_bytes: u64,
        limits: &SampleLimits,
    ) -> Result<Self, ValidationError> {
        let file_name = file_name.into().trim().to_string();
        if file_name.is_empty() {
            return Err(ValidationError::empty_field(FIELD));
        }
        if !limits.accepts_extension(&file_name) {
            return Err(ValidationError::invalid_format(
                FIELD,
                format!(
                    "'{}' is not an accepted file type ({})",
                    file_name,
                    limits.extensions_label()
                ),
            ));
        }
        if size_bytes == 0 {
            return Err(ValidationError::invalid_format(
                FIELD,
                format!("'{}' is empty", file_name),
            ));
        }
        if size_bytes > limits.max_bytes {
            return Err(ValidationError::invalid_format(
                FIELD,
                format!(
                    "'{}' exceeds the {} byte limit",
                    file_name, limits.max_bytes
                ),
            ));
        }

        Ok(Self {
            id: SampleId::new(),
            file_name,
            size_bytes,
        })
    }
}
