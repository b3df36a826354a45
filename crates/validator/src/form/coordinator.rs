//! Whole-form validation passes.

use crate::evaluator::evaluate;
use crate::field::FieldDescriptor;

use super::report::{FormValidationReport, ValidationResult};
use super::sink::FieldResultSink;

/// Evaluates a single field and forwards its message to the sink.
pub fn validate_field<S>(field: &FieldDescriptor, sink: &mut S) -> ValidationResult
where
    S: FieldResultSink + ?Sized,
{
    let result = ValidationResult::new(field.id(), evaluate(field));
    tracing::trace!(
        field = field.id(),
        valid = result.is_valid(),
        kind = result.kind().map(|k| k.code()),
        "field evaluated"
    );
    sink.on_field_result(field.id(), result.message());
    result
}

/// Validates every field in declaration order.
///
/// Every field is evaluated even after a failure, and the sink sees exactly
/// one call per field so stale messages get cleared.
pub fn validate_form<'a, I, S>(fields: I, sink: &mut S) -> FormValidationReport
where
    I: IntoIterator<Item = &'a FieldDescriptor>,
    S: FieldResultSink + ?Sized,
{
    let report: FormValidationReport = fields
        .into_iter()
        .map(|field| validate_field(field, sink))
        .collect();

    tracing::debug!(
        fields = report.len(),
        invalid = report.invalid().count(),
        valid = report.is_valid(),
        "form validated"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::sink::{InlineMessages, NoopSink};

    fn fields(name: &str, price: &str) -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::builder("name", "Name")
                .required(true)
                .min_length(3)
                .value(name)
                .build(),
            FieldDescriptor::builder("price", "Price")
                .required(true)
                .value(price)
                .build(),
        ]
    }

    #[test]
    fn test_all_fields_evaluated() {
        let mut calls = Vec::new();
        let mut sink = |id: &str, message: Option<&str>| calls.push((id.to_owned(), message.is_some()));
        let report = validate_form(&fields("", ""), &mut sink);

        assert!(!report.is_valid());
        assert_eq!(report.invalid().count(), 2);
        assert_eq!(
            calls,
            [("name".to_owned(), true), ("price".to_owned(), true)]
        );
    }

    #[test]
    fn test_sink_cleared_on_fix() {
        let mut display = InlineMessages::new();
        validate_form(&fields("Hi", "10"), &mut display);
        assert_eq!(display.message("name"), Some("Name must be at least 3 characters."));

        let report = validate_form(&fields("Hub", "10"), &mut display);
        assert!(report.is_valid());
        assert!(display.invalid_fields().next().is_none());
    }

    #[test]
    fn test_empty_form_is_valid() {
        let report = validate_form(Vec::<FieldDescriptor>::new().iter(), &mut NoopSink);
        assert!(report.is_empty());
        assert!(report.is_valid());
    }
}
