//! Presence and length rules
//!
//! Both look at the trimmed value so stray whitespace never counts as input.
//! Length is measured in Unicode scalar values.

use crate::foundation::ValidationError;

use super::is_filled;

#[inline]
fn trimmed_len(input: &str) -> usize {
    input.trim().chars().count()
}

crate::validator! {
    /// Fails when the trimmed value is empty.
    pub Required { label: String } for str;
    rule(self, input) { is_filled(input) }
    error(self, input) { ValidationError::missing_required(&self.label) }
    new(label: impl Into<String>) { Self { label: label.into() } }
    fn required(label: impl Into<String>);
}

crate::validator! {
    /// Validates that the trimmed value has at least `min` characters.
    pub MinLength { label: String, min: usize } for str;
    rule(self, input) { trimmed_len(input) >= self.min }
    error(self, input) { ValidationError::too_short(&self.label, self.min, trimmed_len(input)) }
    new(label: impl Into<String>, min: usize) { Self { label: label.into(), min } }
    fn min_length(label: impl Into<String>, min: usize);
}
