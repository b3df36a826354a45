//! # stockroom-validator
//!
//! Field and form validation for the stockroom admin forms.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockroom_validator::prelude::*;
//!
//! let form = FieldSet::new(vec![
//!     FieldDescriptor::builder("name", "Name").required(true).min_length(3).value("Hi").build(),
//! ])?;
//! let mut attached = attach(form, InlineMessages::new(), ValidationConfig::default());
//!
//! let outcome = attached.submit();
//! assert!(!outcome.is_proceed());
//! assert_eq!(
//!     attached.sink().message("name"),
//!     Some("Name must be at least 3 characters."),
//! );
//! ```
//!
//! ## Layers
//!
//! - [`field`]: descriptors, patterns and their serde form
//! - [`rules`] and [`evaluator`]: one field, first failure wins
//! - [`form`]: whole-form passes, sinks, attachment to a host form
//!
//! Rules are plain [`Validate`](foundation::Validate) implementors, so new
//! ones can be written with the [`validator!`] macro and chained with the
//! [`combinators`].

// ValidationError is returned by every rule; boxing it buys nothing here.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod config;
pub mod evaluator;
pub mod field;
pub mod form;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;

pub use config::{ConfigError, ValidationConfig};
