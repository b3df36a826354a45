use pretty_assertions::assert_eq;
use rstest::rstest;
use stockroom_validator::prelude::*;

use crate::common::{name, number, product_form, sku};

#[rstest]
#[case::configured_message(Some("Format: AAA-000-000"), "Format: AAA-000-000")]
#[case::default_message(None, "SKU is invalid.")]
fn sku_pattern_mismatch(#[case] configured: Option<&str>, #[case] expected: &str) {
    let err = evaluate(&sku("abc-123-000", configured)).unwrap();
    assert_eq!(err.kind, FailureKind::PatternMismatch);
    assert_eq!(err.message, expected);
    assert_eq!(err.param("pattern"), Some(r"^[A-Z]{3}-\d{3}-\d{3}$"));
}

#[rstest]
#[case("ABC-123-000")]
#[case("MON-270-004")]
fn sku_pattern_match(#[case] value: &str) {
    assert_eq!(evaluate(&sku(value, None)), None);
}

#[test]
fn sku_pattern_is_not_a_substring_search() {
    let field = FieldDescriptor::builder("sku", "SKU")
        .pattern(FieldPattern::new(r"[A-Z]{3}").unwrap())
        .value("XABCX")
        .build();
    assert_eq!(evaluate(&field).map(|e| e.kind), Some(FailureKind::PatternMismatch));
}

#[rstest]
#[case("Hi", Some("Name must be at least 3 characters."))]
#[case("  Hi  ", Some("Name must be at least 3 characters."))]
#[case("", Some("Name is required."))]
#[case("Hub", None)]
fn name_min_length(#[case] value: &str, #[case] expected: Option<&str>) {
    let result = validate_field(&name(value), &mut NoopSink);
    assert_eq!(result.message(), expected);
}

#[rstest]
#[case("", Some("Price is required."))]
#[case("   ", Some("Price is required."))]
#[case("42.50", None)]
fn price_required(#[case] value: &str, #[case] expected: Option<&str>) {
    let result = validate_field(&number("price", "Price", value), &mut NoopSink);
    assert_eq!(result.message(), expected);
}

#[rstest]
#[case("buyer@stockroom.io", None)]
#[case("first.last-name@mail.example.com", None)]
#[case("buyer@stockroom", Some("Please enter a valid email address."))]
#[case("buyer stockroom.io", Some("Please enter a valid email address."))]
#[case("buyer@stockroom.toolongtld", Some("Please enter a valid email address."))]
#[case("", None)]
fn email_format(#[case] value: &str, #[case] expected: Option<&str>) {
    let field = FieldDescriptor::builder("contact", "Contact")
        .kind(FieldKind::Email)
        .value(value)
        .build();
    assert_eq!(evaluate(&field).as_ref().map(|e| &*e.message), expected);
}

#[test]
fn four_field_form_with_one_invalid_field() {
    let fields = product_form("KEY-123-001", "Hi", "85.00", "120");
    let mut calls: Vec<(String, Option<String>)> = Vec::new();
    let report = validate_form(&fields, &mut |id: &str, message: Option<&str>| {
        calls.push((id.to_owned(), message.map(str::to_owned)));
    });

    assert!(!report.is_valid());
    assert_eq!(calls.len(), 4);
    assert_eq!(
        calls,
        vec![
            ("sku".to_owned(), None),
            ("name".to_owned(), Some("Name must be at least 3 characters.".to_owned())),
            ("price".to_owned(), None),
            ("stock".to_owned(), None),
        ]
    );
}

#[test]
fn report_serializes_for_hosts() {
    let report = validate_form(&product_form("", "Monitor", "450", "3"), &mut NoopSink);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "is_valid": false,
            "results": [
                { "field_id": "sku", "message": "SKU is required.", "kind": "missing_required" },
                { "field_id": "name", "message": null, "kind": null },
                { "field_id": "price", "message": null, "kind": null },
                { "field_id": "stock", "message": null, "kind": null },
            ]
        })
    );
}

#[test]
fn form_file_round_trip_to_report() {
    let spec: FormSpec = toml::from_str(
        r#"
        [validation]
        validate_on_blur = false

        [[fields]]
        id = "sku"
        label = "SKU"
        required = true
        pattern = '^[A-Z]{3}-\d{3}-\d{3}$'
        pattern_message = "Format: AAA-000-000"
        value = "abc-123-000"

        [[fields]]
        id = "contact"
        kind = "email"
        value = "ops@stockroom.io"
        "#,
    )
    .unwrap();

    assert!(!spec.validation.validate_on_blur);
    let fields = spec.descriptors().unwrap();
    let report = validate_form(&fields, &mut NoopSink);
    assert_eq!(
        report.get("sku").and_then(ValidationResult::message),
        Some("Format: AAA-000-000")
    );
    assert!(report.get("contact").is_some_and(ValidationResult::is_valid));
}

#[test]
fn malformed_pattern_is_a_config_error() {
    let spec = FieldSpec {
        id: "sku".into(),
        pattern: Some("[A-Z".into()),
        ..FieldSpec::default()
    };
    assert!(matches!(
        spec.to_descriptor(),
        Err(ConfigError::InvalidPattern { .. })
    ));
}
