//! Error types for validation failures
//!
//! A failed rule is data, not a fault: every [`ValidationError`] carries a
//! [`FailureKind`], the human-readable message shown next to the field, and
//! the parameters that produced it.
//!
//! All string fields use `Cow<'static, str>` so static messages never
//! allocate.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

// ============================================================================
// FAILURE KIND
// ============================================================================

/// The rule that rejected a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// A required field has no (non-whitespace) value.
    MissingRequired,
    /// An email field does not look like `local@domain.tld`.
    InvalidEmailFormat,
    /// The value does not fully match the field's custom pattern.
    PatternMismatch,
    /// The trimmed value is shorter than the configured minimum.
    TooShort,
}

impl FailureKind {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingRequired => "required",
            Self::InvalidEmailFormat => "email",
            Self::PatternMismatch => "pattern",
            Self::TooShort => "min_length",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single rule failure for one field.
///
/// # Examples
///
/// ```rust,ignore
/// use stockroom_validator::foundation::{FailureKind, ValidationError};
///
/// let error = ValidationError::new(FailureKind::TooShort, "Name must be at least 3 characters.")
///     .with_field("name")
///     .with_param("min", "3")
///     .with_param("actual", "2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Which rule failed.
    pub kind: FailureKind,

    /// Message displayed next to the field.
    pub message: Cow<'static, str>,

    /// Identifier of the field that failed, once known.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters (typically 0-2).
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,
}

impl ValidationError {
    /// Creates a new validation error with a kind and message.
    pub fn new(kind: FailureKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            field: None,
            params: SmallVec::new(),
        }
    }

    /// Sets the field this error belongs to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Machine-readable code of the failed rule.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.kind, self.message)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// "`{label} is required.`"
    pub fn missing_required(label: &str) -> Self {
        Self::new(FailureKind::MissingRequired, format!("{label} is required."))
    }

    /// "Please enter a valid email address."
    pub fn invalid_email() -> Self {
        Self::new(
            FailureKind::InvalidEmailFormat,
            "Please enter a valid email address.",
        )
    }

    /// Pattern mismatch with the configured message, or "`{label} is invalid.`".
    pub fn pattern_mismatch(label: &str, message: Option<&str>, pattern: &str) -> Self {
        let message = match message {
            Some(message) => message.to_owned(),
            None => format!("{label} is invalid."),
        };
        Self::new(FailureKind::PatternMismatch, message).with_param("pattern", pattern.to_owned())
    }

    /// "`{label} must be at least {min} characters.`"
    pub fn too_short(label: &str, min: usize, actual: usize) -> Self {
        Self::new(
            FailureKind::TooShort,
            format!("{label} must be at least {min} characters."),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
