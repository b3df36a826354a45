//! Core traits for the validation system
//!
//! This module defines the fundamental traits that every field rule implements.

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all field rules implement.
///
/// This trait is generic over the input type. Rules over form values use
/// `Input = str` and receive the raw, untrimmed value.
///
/// # Examples
///
/// ```rust,ignore
/// use stockroom_validator::foundation::{FailureKind, Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new(FailureKind::PatternMismatch, "No spaces allowed."))
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` describing the first failing rule
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError>;
}

impl<V> Validate for Box<V>
where
    V: Validate + ?Sized,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for all types that implement [`Validate`].
///
/// # Examples
///
/// ```rust,ignore
/// use stockroom_validator::prelude::*;
///
/// let name = min_length("Name", 3).when(is_filled);
/// assert!(name.validate("").is_ok());
/// assert!(name.validate("Hi").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Makes validation conditional based on a predicate.
    ///
    /// The validator only runs if the condition returns `true`.
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::when::When;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
    }

    #[test]
    fn test_boxed_validator() {
        let boxed: Box<dyn Validate<Input = str>> = Box::new(AlwaysValid);
        assert!(boxed.validate("test").is_ok());
    }
}
