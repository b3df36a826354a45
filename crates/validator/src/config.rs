//! Configuration types and configuration-time errors.

use serde::{Deserialize, Serialize};

/// Errors raised while building field constraints.
///
/// These are host configuration defects (a typo in a pattern, a non-numeric
/// minimum length, a field without a usable id). They surface when descriptors are built, never during a
/// validation pass.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The custom pattern does not compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    /// The minimum length is not a non-negative integer.
    #[error("invalid min_length for `{field}`: expected a non-negative integer, got `{value}`")]
    InvalidMinLength { field: String, value: String },

    /// A field has an empty id. `position` is 1-based.
    #[error("field #{position} has no id")]
    MissingFieldId { position: usize },

    /// Two fields share an id.
    #[error("duplicate field id `{id}`")]
    DuplicateFieldId { id: String },
}

/// Behaviour of an attached form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Evaluate a field as soon as it loses focus. When `false`, blur only
    /// marks the field touched and feedback waits for submit.
    pub validate_on_blur: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            validate_on_blur: true,
        }
    }
}

impl ValidationConfig {
    /// Submit-only feedback.
    #[must_use]
    pub fn submit_only() -> Self {
        Self {
            validate_on_blur: false,
        }
    }
}
