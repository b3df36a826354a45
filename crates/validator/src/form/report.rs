//! Per-field results and the aggregated form report.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::foundation::{FailureKind, ValidationError};

/// Outcome of evaluating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    field_id: String,
    error: Option<ValidationError>,
}

impl ValidationResult {
    pub fn new(field_id: impl Into<String>, error: Option<ValidationError>) -> Self {
        Self {
            field_id: field_id.into(),
            error,
        }
    }

    #[must_use]
    pub fn field_id(&self) -> &str {
        &self.field_id
    }

    /// Message to display; `None` means the field is valid.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_ref())
    }

    #[must_use]
    pub fn kind(&self) -> Option<FailureKind> {
        self.error.as_ref().map(|e| e.kind)
    }

    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 3)?;
        state.serialize_field("field_id", &self.field_id)?;
        state.serialize_field("message", &self.message())?;
        state.serialize_field("kind", &self.kind())?;
        state.end()
    }
}

/// Results of one validation pass over a whole form.
///
/// Holds one result per field in declaration order. Form validity is
/// derived from the results every time it is asked for, so it cannot
/// disagree with them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidationReport {
    results: Vec<ValidationResult>,
}

impl FormValidationReport {
    #[must_use]
    pub fn new(results: Vec<ValidationResult>) -> Self {
        Self { results }
    }

    /// `true` iff no result carries a message.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(ValidationResult::is_valid)
    }

    #[must_use]
    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    #[must_use]
    pub fn get(&self, field_id: &str) -> Option<&ValidationResult> {
        self.results.iter().find(|r| r.field_id == field_id)
    }

    /// Failing results, in declaration order.
    pub fn invalid(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| !r.is_valid())
    }

    /// First failing field; hosts move focus here after a blocked submit.
    #[must_use]
    pub fn first_invalid(&self) -> Option<&ValidationResult> {
        self.invalid().next()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl FromIterator<ValidationResult> for FormValidationReport {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

impl Serialize for FormValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FormValidationReport", 2)?;
        state.serialize_field("is_valid", &self.is_valid())?;
        state.serialize_field("results", &self.results)?;
        state.end()
    }
}
