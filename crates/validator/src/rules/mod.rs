//! Built-in field rules
//!
//! One rule per failure kind:
//!
//! | rule | failure |
//! |---|---|
//! | [`Required`] | `MissingRequired` |
//! | [`Email`] | `InvalidEmailFormat` |
//! | [`MatchesPattern`] | `PatternMismatch` |
//! | [`MinLength`] | `TooShort` |

pub mod content;
pub mod length;

pub use content::{Email, MatchesPattern, email, matches_pattern};
pub use length::{MinLength, Required, min_length, required};

/// A value counts as filled once it has a non-whitespace character.
#[inline]
#[must_use]
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}
