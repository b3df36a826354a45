//! String content rules
//!
//! Email format and custom patterns. Both test the raw value; callers gate
//! them on [`is_filled`](super::is_filled).

use std::sync::LazyLock;

use crate::field::FieldPattern;
use crate::foundation::ValidationError;

/// `local@domain.tld`: the domain needs at least one dot and a 2-6 letter TLD.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$")
        .expect("email regex is valid")
});

// ============================================================================
// EMAIL
// ============================================================================

crate::validator! {
    /// Validates email format.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_email() }
    fn email();
}

// ============================================================================
// CUSTOM PATTERN
// ============================================================================

crate::validator! {
    /// Validates that the whole value matches a configured pattern.
    pub MatchesPattern { label: String, pattern: FieldPattern } for str;
    rule(self, input) { self.pattern.is_full_match(input) }
    error(self, input) {
        ValidationError::pattern_mismatch(&self.label, self.pattern.message(), self.pattern.as_str())
    }
    new(label: impl Into<String>, pattern: FieldPattern) {
        Self { label: label.into(), pattern }
    }
    fn matches_pattern(label: impl Into<String>, pattern: FieldPattern);
}

// ============================================================================
// TESTS
// ============================================================================
