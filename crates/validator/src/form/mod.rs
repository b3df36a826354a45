//! Form-level validation
//!
//! - [`validate_form`] runs one pass over every field and aggregates a
//!   [`FormValidationReport`].
//! - [`attach`] binds a host form to a sink and drives passes from blur and
//!   submit events.

mod attach;
mod coordinator;
mod fieldset;
mod report;
mod sink;
mod state;

pub use attach::{AttachedForm, EventOutcome, FormEvent, FormHandle, SubmitOutcome, attach};
pub use coordinator::{validate_field, validate_form};
pub use fieldset::FieldSet;
pub use report::{FormValidationReport, ValidationResult};
pub use sink::{FieldResultSink, InlineMessages, NoopSink};
pub use state::FieldState;
