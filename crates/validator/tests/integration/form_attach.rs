use pretty_assertions::assert_eq;
use stockroom_validator::prelude::*;

use crate::common::product_form;

fn attached(config: ValidationConfig) -> AttachedForm<FieldSet, InlineMessages> {
    attach(
        FieldSet::new(product_form("", "", "", "")).unwrap(),
        InlineMessages::new(),
        config,
    )
}

#[test]
fn blur_shows_then_clears_a_message() {
    let mut form = attached(ValidationConfig::default());

    form.blur("name");
    assert_eq!(form.sink().message("name"), Some("Name is required."));
    assert_eq!(form.state("name"), Some(FieldState::Invalid));

    form.form_mut().set_value("name", "Monitor");
    form.blur("name");
    assert_eq!(form.sink().message("name"), None);
    assert_eq!(form.state("name"), Some(FieldState::Valid));
}

#[test]
fn submit_evaluates_untouched_fields() {
    let mut form = attached(ValidationConfig::default());
    form.form_mut().set_value("sku", "MON-270-004");

    let outcome = form.handle(FormEvent::Submit);
    let EventOutcome::Submitted(SubmitOutcome::Blocked(report)) = outcome else {
        panic!("expected a blocked submit, got {outcome:?}");
    };

    assert_eq!(
        report.invalid().map(ValidationResult::field_id).collect::<Vec<_>>(),
        ["name", "price", "stock"]
    );
    assert_eq!(
        form.sink().invalid_fields().collect::<Vec<_>>(),
        ["name", "price", "stock"]
    );
    assert_eq!(form.state("sku"), Some(FieldState::Valid));
}

#[test]
fn valid_form_submit_proceeds() {
    let form = FieldSet::new(product_form("KEY-123-001", "Mechanical keyboard", "85.00", "120")).unwrap();
    let mut form = attach(form, InlineMessages::new(), ValidationConfig::default());

    let outcome = form.submit();
    assert!(outcome.is_proceed());
    assert_eq!(outcome.report().len(), 4);
    assert_eq!(form.sink().invalid_fields().count(), 0);
}

#[test]
fn submit_only_config_defers_feedback() {
    let mut form = attached(ValidationConfig::submit_only());

    assert_eq!(form.handle(FormEvent::Blur("price".into())), EventOutcome::Field(None));
    assert_eq!(form.state("price"), Some(FieldState::Touched));
    assert_eq!(form.sink().message("price"), None);

    form.submit();
    assert_eq!(form.sink().message("price"), Some("Price is required."));
}

#[test]
fn repeated_submits_are_idempotent_for_the_display() {
    let mut form = attached(ValidationConfig::default());
    form.submit();
    let first = form.sink().clone();
    form.submit();

    assert_eq!(form.sink(), &first);
    assert_eq!(form.sink().slot_count(), 4);
}

#[test]
fn reset_and_detach() {
    let mut form = attached(ValidationConfig::default());
    form.form_mut().set_value("name", "Hi");
    form.submit();
    form.reset();

    for id in ["sku", "name", "price", "stock"] {
        assert_eq!(form.state(id), Some(FieldState::Untouched));
    }

    let (fields, display) = form.detach();
    assert!(fields.fields().iter().all(|f| f.value().is_empty()));
    assert_eq!(display.invalid_fields().count(), 0);
}

#[test]
fn form_file_without_ids_never_attaches() {
    let spec: FormSpec = toml::from_str(
        r#"
        [[fields]]
        label = "SKU"
        required = true
        value = "ABC-123-000"

        [[fields]]
        label = "Name"
        required = true
        "#,
    )
    .unwrap();

    let err = FieldSet::from_spec(&spec).unwrap_err();
    assert!(matches!(err, ConfigError::MissingFieldId { position: 1 }));
}

#[test]
fn submit_sees_every_field_of_a_field_set() {
    let form = FieldSet::new(vec![
        FieldDescriptor::builder("sku", "SKU").required(true).value("ABC-123-000").build(),
        FieldDescriptor::builder("name", "Name").required(true).build(),
    ])
    .unwrap();
    let mut form = attach(form, InlineMessages::new(), ValidationConfig::default());

    let outcome = form.submit();
    assert!(!outcome.is_proceed());
    assert_eq!(
        outcome.report().invalid().map(ValidationResult::field_id).collect::<Vec<_>>(),
        ["name"]
    );
}
