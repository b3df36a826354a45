//! AND combinator - logical conjunction of validators
//!
//! [`AndAll`] runs a dynamic list of rules and stops at the first failure, so
//! the error reported is always from the earliest rule in declaration order.
//!
//! # Examples
//!
//! ```rust,ignore
//! use stockroom_validator::prelude::*;
//!
//! let validator = and_all(vec![required("Name"), required("Label")]);
//! assert!(validator.validate("Bolt").is_ok());
//! assert!(validator.validate("").is_err()); // fails the first rule only
//! ```

use crate::foundation::{Validate, ValidationError};

/// Creates an [`AndAll`] combinator from a vector of validators.
///
/// Used when the set of rules is only known at runtime (e.g. built from a
/// field descriptor).
#[must_use]
pub fn and_all<V>(validators: Vec<V>) -> AndAll<V>
where
    V: Validate,
{
    AndAll { validators }
}

/// Combines multiple validators with logical AND.
///
/// Validation stops at the first failure (short-circuits).
#[derive(Debug, Clone)]
pub struct AndAll<V> {
    validators: Vec<V>,
}

impl<V> AndAll<V> {
    /// Number of rules in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns `true` if the chain has no rules (accepts everything).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl<V> Validate for AndAll<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        for validator in &self.validators {
            validator.validate(input)?;
        }
        Ok(())
    }
}
