//! Field rule evaluator
//!
//! Turns one [`FieldDescriptor`] into an ordered rule chain and reports the
//! first failure. Precedence is fixed:
//!
//! 1. required (trimmed value empty)
//! 2. email format (`kind = email`)
//! 3. custom pattern (full match of the raw value)
//! 4. minimum length (trimmed)
//!
//! Rules 2-4 only run once the field is filled, so an empty optional field
//! always passes.

use crate::combinators::{AndAll, and_all};
use crate::field::{FieldDescriptor, FieldKind};
use crate::foundation::{Validate, ValidateExt, ValidationError};
use crate::rules::{Email, MatchesPattern, MinLength, Required, is_filled};

/// A boxed rule over raw field values.
pub type FieldRule = Box<dyn Validate<Input = str>>;

/// Ordered, short-circuiting rules for one field.
pub type RuleChain = AndAll<FieldRule>;

/// Builds the rule chain for a descriptor, in precedence order.
#[must_use]
pub fn rules_for(descriptor: &FieldDescriptor) -> RuleChain {
    let label = descriptor.label();
    let mut rules: Vec<FieldRule> = Vec::with_capacity(4);

    if descriptor.is_required() {
        rules.push(Box::new(Required::new(label)));
    }
    if descriptor.kind() == FieldKind::Email {
        rules.push(Box::new(Email.when(is_filled)));
    }
    if let Some(pattern) = descriptor.pattern() {
        rules.push(Box::new(
            MatchesPattern::new(label, pattern.clone()).when(is_filled),
        ));
    }
    if let Some(min) = descriptor.min_length() {
        rules.push(Box::new(MinLength::new(label, min).when(is_filled)));
    }

    and_all(rules)
}

/// Evaluates one field. `None` means the field is valid.
///
/// The returned error is tagged with the descriptor's id.
#[must_use]
pub fn evaluate(descriptor: &FieldDescriptor) -> Option<ValidationError> {
    let outcome = rules_for(descriptor).validate(descriptor.value());
    match outcome {
        Ok(()) => None,
        Err(error) => Some(error.with_field(descriptor.id().to_owned())),
    }
}
