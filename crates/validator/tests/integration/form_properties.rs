use proptest::prelude::*;
use stockroom_validator::prelude::*;

const PATTERNS: &[&str] = &[r"^[A-Z]{3}-\d{3}-\d{3}$", "[0-9]+", "[a-z ]*", ".+@.+"];

fn descriptor(
    id: String,
    required: bool,
    email: bool,
    pattern: Option<usize>,
    min_length: Option<usize>,
    value: String,
) -> FieldDescriptor {
    let pattern = pattern.map(|i| FieldPattern::new(PATTERNS[i]).unwrap());
    FieldDescriptor::builder(id, "Field")
        .required(required)
        .kind(if email { FieldKind::Email } else { FieldKind::Text })
        .maybe_pattern(pattern)
        .maybe_min_length(min_length)
        .value(value)
        .build()
}

fn any_field() -> impl Strategy<Value = FieldDescriptor> {
    (
        "[a-z]{1,8}",
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(0..PATTERNS.len()),
        proptest::option::of(0usize..12),
        ".{0,24}",
    )
        .prop_map(|(id, required, email, pattern, min, value)| {
            descriptor(id, required, email, pattern, min, value)
        })
}

proptest! {
    #[test]
    fn required_blank_always_reports_required(
        field in any_field(),
        blank in "[ \t\n]{0,6}",
    ) {
        let field = FieldDescriptor::builder(field.id(), "Field")
            .required(true)
            .kind(field.kind())
            .maybe_pattern(field.pattern().cloned())
            .maybe_min_length(field.min_length())
            .value(blank)
            .build();
        let err = evaluate(&field).unwrap();
        prop_assert_eq!(err.kind, FailureKind::MissingRequired);
        prop_assert_eq!(&*err.message, "Field is required.");
    }

    #[test]
    fn optional_empty_always_valid(field in any_field(), blank in "[ \t]{0,4}") {
        let field = FieldDescriptor::builder(field.id(), "Field")
            .kind(field.kind())
            .maybe_pattern(field.pattern().cloned())
            .maybe_min_length(field.min_length())
            .value(blank)
            .build();
        prop_assert!(evaluate(&field).is_none());
    }

    #[test]
    fn evaluate_is_idempotent(field in any_field()) {
        prop_assert_eq!(evaluate(&field), evaluate(&field));
    }

    #[test]
    fn report_validity_is_the_and_of_results(fields in proptest::collection::vec(any_field(), 0..6)) {
        let report = validate_form(&fields, &mut NoopSink);
        let expected = fields.iter().all(|f| evaluate(f).is_none());
        prop_assert_eq!(report.is_valid(), expected);
        prop_assert_eq!(report.is_valid(), report.results().iter().all(ValidationResult::is_valid));
    }

    #[test]
    fn report_preserves_declaration_order(fields in proptest::collection::vec(any_field(), 0..6)) {
        let mut seen = Vec::new();
        let report = validate_form(&fields, &mut |id: &str, _: Option<&str>| seen.push(id.to_owned()));

        let declared: Vec<&str> = fields.iter().map(FieldDescriptor::id).collect();
        let reported: Vec<&str> = report.results().iter().map(ValidationResult::field_id).collect();
        prop_assert_eq!(&reported, &declared);
        prop_assert_eq!(seen, declared);
    }
}
