//! WHEN combinator - conditional validation
//!
//! [`When`] runs its inner validator only if a predicate holds. Field rules
//! use it with [`is_filled`](crate::rules::is_filled) so that optional fields
//! are only checked once the user typed something.

use crate::foundation::{Validate, ValidationError};

/// Conditionally applies a validator based on a predicate.
///
/// If the condition returns `false`, validation succeeds immediately.
#[derive(Debug, Clone, Copy)]
pub struct When<V, C> {
    pub(crate) validator: V,
    pub(crate) condition: C,
}

impl<V, C> When<V, C> {
    /// Creates a new `When` combinator.
    pub fn new(validator: V, condition: C) -> Self {
        Self {
            validator,
            condition,
        }
    }
}

impl<V, C> Validate for When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if (self.condition)(input) {
            self.validator.validate(input)
        } else {
            Ok(())
        }
    }
}
