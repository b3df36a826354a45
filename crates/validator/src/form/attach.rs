//! Attaching validation to a host form.
//!
//! [`attach`] wires a [`FormHandle`] to a [`FieldResultSink`] and returns an
//! [`AttachedForm`] that reacts to blur and submit events. Each event
//! re-reads the form through [`FormHandle::snapshot`], so the latest values
//! are always the ones validated.

use indexmap::IndexMap;

use crate::config::ValidationConfig;
use crate::field::FieldDescriptor;

use super::coordinator::{validate_field, validate_form};
use super::report::{FormValidationReport, ValidationResult};
use super::sink::FieldResultSink;
use super::state::FieldState;

// ============================================================================
// HOST FORM
// ============================================================================

/// A host form the validator can read.
pub trait FormHandle {
    /// Field ids in declaration order. Ids are non-blank and unique.
    fn field_ids(&self) -> Vec<&str>;

    /// Fresh descriptor for a field's current value, `None` for unknown ids.
    fn snapshot(&self, field_id: &str) -> Option<FieldDescriptor>;

    /// Empties every field value.
    fn clear_values(&mut self);

    /// Descriptors for every field, in declaration order.
    fn snapshot_all(&self) -> Vec<FieldDescriptor> {
        self.field_ids()
            .into_iter()
            .filter_map(|id| self.snapshot(id))
            .collect()
    }
}

// ============================================================================
// EVENTS AND OUTCOMES
// ============================================================================

/// Host events an attached form reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field lost focus.
    Blur(String),
    /// The form is being submitted.
    Submit,
    /// The form was reset.
    Reset,
}

/// Verdict of a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field is valid; the host may continue submission.
    Proceed(FormValidationReport),
    /// At least one field is invalid; submission must not continue.
    Blocked(FormValidationReport),
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed(_))
    }

    #[must_use]
    pub fn report(&self) -> &FormValidationReport {
        match self {
            Self::Proceed(report) | Self::Blocked(report) => report,
        }
    }

    #[must_use]
    pub fn into_report(self) -> FormValidationReport {
        match self {
            Self::Proceed(report) | Self::Blocked(report) => report,
        }
    }
}

/// What [`AttachedForm::handle`] did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// A blur; carries the field result when the field was evaluated.
    Field(Option<ValidationResult>),
    Submitted(SubmitOutcome),
    Reset,
}

// ============================================================================
// ATTACHED FORM
// ============================================================================

/// A form with validation attached.
///
/// Owns the host form and the sink until [`detach`](Self::detach).
#[derive(Debug)]
pub struct AttachedForm<F, S> {
    form: F,
    sink: S,
    config: ValidationConfig,
    states: IndexMap<String, FieldState>,
}

/// Attaches validation to `form`, reporting messages to `sink`.
pub fn attach<F, S>(form: F, sink: S, config: ValidationConfig) -> AttachedForm<F, S>
where
    F: FormHandle,
    S: FieldResultSink,
{
    let states: IndexMap<String, FieldState> = form
        .field_ids()
        .into_iter()
        .map(|id| (id.to_owned(), FieldState::Untouched))
        .collect();
    tracing::debug!(
        fields = states.len(),
        validate_on_blur = config.validate_on_blur,
        "form attached"
    );

    AttachedForm {
        form,
        sink,
        config,
        states,
    }
}

impl<F, S> AttachedForm<F, S>
where
    F: FormHandle,
    S: FieldResultSink,
{
    /// Handles a field losing focus.
    ///
    /// Marks the field touched and, when blur validation is enabled,
    /// evaluates that field alone. Unknown ids are ignored.
    pub fn blur(&mut self, field_id: &str) -> Option<ValidationResult> {
        let Some(descriptor) = self.form.snapshot(field_id) else {
            tracing::warn!(field = field_id, "blur on unknown field ignored");
            return None;
        };

        self.transition(field_id, FieldState::Touched);
        if !self.config.validate_on_blur {
            return None;
        }

        let result = validate_field(&descriptor, &mut self.sink);
        self.transition(field_id, FieldState::evaluated(result.is_valid()));
        Some(result)
    }

    /// Validates every field regardless of prior state.
    pub fn submit(&mut self) -> SubmitOutcome {
        let fields = self.form.snapshot_all();
        let report = validate_form(&fields, &mut self.sink);

        let states: Vec<(String, FieldState)> = report
            .results()
            .iter()
            .map(|r| (r.field_id().to_owned(), FieldState::evaluated(r.is_valid())))
            .collect();
        for (id, state) in states {
            self.transition(&id, state);
        }

        if report.is_valid() {
            SubmitOutcome::Proceed(report)
        } else {
            SubmitOutcome::Blocked(report)
        }
    }

    /// Empties the form, clears displayed messages and returns every field
    /// to `Untouched`.
    pub fn reset(&mut self) {
        self.form.clear_values();
        for (id, state) in &mut self.states {
            self.sink.on_field_result(id, None);
            *state = FieldState::Untouched;
        }
        tracing::debug!(fields = self.states.len(), "form reset");
    }

    /// Dispatches a host event.
    pub fn handle(&mut self, event: FormEvent) -> EventOutcome {
        match event {
            FormEvent::Blur(id) => EventOutcome::Field(self.blur(&id)),
            FormEvent::Submit => EventOutcome::Submitted(self.submit()),
            FormEvent::Reset => {
                self.reset();
                EventOutcome::Reset
            }
        }
    }

    /// Current interaction state, `None` for unknown ids.
    #[must_use]
    pub fn state(&self, field_id: &str) -> Option<FieldState> {
        self.states.get(field_id).copied()
    }

    #[must_use]
    pub fn config(&self) -> ValidationConfig {
        self.config
    }

    #[must_use]
    pub fn form(&self) -> &F {
        &self.form
    }

    /// Mutable access to the host form, for typing into fields.
    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Detaches validation, handing back the form and the sink.
    pub fn detach(self) -> (F, S) {
        tracing::debug!("form detached");
        (self.form, self.sink)
    }

    fn transition(&mut self, field_id: &str, next: FieldState) {
        let state = self
            .states
            .entry(field_id.to_owned())
            .or_insert(FieldState::Untouched);
        let prev = *state;
        if prev != next {
            tracing::trace!(field = field_id, from = %prev, to = %next, "field state");
            *state = next;
        }
    }
}
