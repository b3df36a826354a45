//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`FailureKind`]
//!
//! Every field rule is a `Validate<Input = str>` returning the first failure
//! as a [`ValidationError`]. Rules are gated with `.when()`, which is how the
//! evaluator expresses "optional fields are only checked when filled".

pub mod error;
pub mod traits;

pub use error::{FailureKind, ValidationError};
pub use traits::{Validate, ValidateExt};
