//! Validator combinators
//!
//! - [`AndAll`]: every rule must pass, first failure wins
//! - [`When`]: run a rule only if a predicate holds

pub mod and;
pub mod when;

pub use and::{AndAll, and_all};
pub use when::When;
