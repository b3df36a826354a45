//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use stockroom_validator::prelude::*;
//! ```

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{FailureKind, Validate, ValidateExt, ValidationError};

// ============================================================================
// FIELDS AND RULES
// ============================================================================

pub use crate::evaluator::{evaluate, rules_for};
pub use crate::field::{FieldDescriptor, FieldKind, FieldPattern, FieldSpec, FormSpec};
pub use crate::rules::{
    Email, MatchesPattern, MinLength, Required, email, is_filled, matches_pattern, min_length,
    required,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{AndAll, When, and_all};

// ============================================================================
// FORMS
// ============================================================================

pub use crate::config::{ConfigError, ValidationConfig};
pub use crate::form::{
    AttachedForm, EventOutcome, FieldResultSink, FieldSet, FieldState, FormEvent, FormHandle,
    FormValidationReport, InlineMessages, NoopSink, SubmitOutcome, ValidationResult, attach,
    validate_field, validate_form,
};
