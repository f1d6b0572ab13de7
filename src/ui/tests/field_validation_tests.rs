//! Unit tests for text input field validation.

use rstest::rstest;
use serde_json::{Value, json};

use crate::ui::{
    config::PlatformLimits,
    domain::{FieldDescription, Resolution, TextInput, TextInputStyle},
    error::BuildError,
    tests::fixtures::limits,
    validation::validate_field,
};

// ============================================================================
// Style
// ============================================================================

#[rstest]
#[case(FieldDescription::new("a", "A"))]
#[case(FieldDescription::new("b", "B").with_placeholder("hint"))]
#[case(FieldDescription::new("c", "C").with_required(true))]
fn missing_style_defaults_to_short(
    limits: PlatformLimits,
    #[case] description: FieldDescription,
) {
    let validated = validate_field(&description, &limits);

    assert_eq!(validated.value.style, TextInputStyle::Short);
    assert!(validated.is_clean());
}

#[rstest]
#[case("bogus")]
#[case("paragraph")]
#[case("TextInputStyle.Long")]
#[case("")]
fn unknown_style_is_corrected_with_one_diagnostic(limits: PlatformLimits, #[case] style: &str) {
    let description = FieldDescription::new("topic", "Topic").with_style(style);

    let validated = validate_field(&description, &limits);

    assert_eq!(validated.value.style, TextInputStyle::Short);
    assert_eq!(validated.diagnostics.len(), 1);
    let diagnostic = validated.diagnostics.first().expect("one diagnostic");
    assert_eq!(diagnostic.error, BuildError::InvalidStyle(style.to_owned()));
    assert_eq!(diagnostic.resolution, Resolution::AutoCorrected);
}

#[rstest]
#[case(json!(2), "2")]
#[case(json!(true), "true")]
#[case(json!(["Paragraph"]), r#"["Paragraph"]"#)]
fn non_string_style_from_json_is_corrected(
    limits: PlatformLimits,
    #[case] style: Value,
    #[case] shown: &str,
) {
    let description: FieldDescription = serde_json::from_value(json!({
        "customID": "topic",
        "label": "Topic",
        "style": style
    }))
    .expect("any style value deserialises");

    let validated = validate_field(&description, &limits);

    assert_eq!(validated.value.style, TextInputStyle::Short);
    assert!(matches!(
        validated.diagnostics.as_slice(),
        [diagnostic] if diagnostic.resolution == Resolution::AutoCorrected
            && diagnostic.error == BuildError::InvalidStyle(shown.to_owned())
    ));
}

#[rstest]
fn paragraph_style_is_kept(limits: PlatformLimits) {
    let description = FieldDescription::new("body", "Body").with_style("TextInputStyle.Paragraph");

    let validated = validate_field(&description, &limits);

    assert_eq!(validated.value.style, TextInputStyle::Paragraph);
    assert!(validated.is_clean());
}

// ============================================================================
// Required flag
// ============================================================================

#[rstest]
#[case(json!("yes"))]
#[case(json!("true"))]
#[case(json!(1))]
#[case(json!(null))]
#[case(json!({"value": true}))]
fn non_boolean_required_becomes_false(limits: PlatformLimits, #[case] required: Value) {
    let description = FieldDescription::new("topic", "Topic").with_required(required);

    let validated = validate_field(&description, &limits);

    assert!(!validated.value.required);
    assert!(matches!(
        validated.diagnostics.as_slice(),
        [diagnostic] if diagnostic.resolution == Resolution::AutoCorrected
            && matches!(diagnostic.error, BuildError::RequiredNotBoolean(_))
    ));
}

#[rstest]
fn boolean_required_is_kept(limits: PlatformLimits) {
    let validated = validate_field(
        &FieldDescription::new("topic", "Topic").with_required(true),
        &limits,
    );
    assert!(validated.value.required);
    assert!(validated.is_clean());
}

#[rstest]
fn null_required_from_json_is_diagnosed_like_the_builder(limits: PlatformLimits) {
    let from_json: FieldDescription = serde_json::from_value(json!({
        "customID": "topic",
        "label": "Topic",
        "required": null
    }))
    .expect("null deserialises");
    let from_builder = FieldDescription::new("topic", "Topic").with_required(Value::Null);

    assert_eq!(from_json.required, Some(Value::Null));
    assert_eq!(from_json, from_builder);
    let validated = validate_field(&from_json, &limits);
    assert!(!validated.value.required);
    assert_eq!(
        validated
            .diagnostics
            .iter()
            .map(|diagnostic| diagnostic.error.clone())
            .collect::<Vec<_>>(),
        vec![BuildError::RequiredNotBoolean("null".to_owned())]
    );
}

#[rstest]
fn absent_required_from_json_is_not_diagnosed(limits: PlatformLimits) {
    let description: FieldDescription =
        serde_json::from_value(json!({ "customID": "topic", "label": "Topic" }))
            .expect("valid description");

    assert_eq!(description.required, None);
    assert!(validate_field(&description, &limits).is_clean());
}

#[rstest]
fn absent_required_defaults_to_false(limits: PlatformLimits) {
    let validated = validate_field(&FieldDescription::new("topic", "Topic"), &limits);
    assert!(!validated.value.required);
}

// ============================================================================
// Identifier, label and placeholder
// ============================================================================

#[rstest]
fn over_long_values_are_diagnosed_and_kept(limits: PlatformLimits) {
    let description = FieldDescription::new("i".repeat(101), "l".repeat(46))
        .with_placeholder("p".repeat(101));

    let validated = validate_field(&description, &limits);

    assert_eq!(validated.value.identifier, description.identifier);
    assert_eq!(validated.value.label, description.label);
    assert_eq!(validated.value.placeholder, description.placeholder);
    let errors: Vec<_> = validated
        .diagnostics
        .iter()
        .map(|diagnostic| diagnostic.error.clone())
        .collect();
    assert_eq!(
        errors,
        vec![
            BuildError::too_long("customID", 100, 101),
            BuildError::too_long("label", 45, 46),
            BuildError::too_long("placeholder", 100, 101),
        ]
    );
    assert!(
        validated
            .diagnostics
            .iter()
            .all(|diagnostic| diagnostic.resolution == Resolution::PassedThrough)
    );
}

#[rstest]
fn values_at_the_limit_are_accepted(limits: PlatformLimits) {
    let description = FieldDescription::new("i".repeat(100), "l".repeat(45))
        .with_placeholder("p".repeat(100));

    assert!(validate_field(&description, &limits).is_clean());
}

#[rstest]
fn missing_identity_is_diagnosed_without_stopping(limits: PlatformLimits) {
    let description = FieldDescription {
        style: Some(json!("bogus")),
        required: Some(json!("no")),
        ..FieldDescription::default()
    };

    let validated = validate_field(&description, &limits);

    assert_eq!(validated.value.identifier, None);
    assert_eq!(validated.value.label, None);
    let errors: Vec<_> = validated
        .diagnostics
        .iter()
        .map(|diagnostic| (diagnostic.error.clone(), diagnostic.resolution))
        .collect();
    assert_eq!(
        errors,
        vec![
            (BuildError::missing("customID"), Resolution::Unresolved),
            (BuildError::missing("label"), Resolution::Unresolved),
            (BuildError::InvalidStyle("bogus".to_owned()), Resolution::AutoCorrected),
            (
                BuildError::RequiredNotBoolean("\"no\"".to_owned()),
                Resolution::AutoCorrected
            ),
        ]
    );
}

#[rstest]
fn diagnostic_contexts_name_the_limit(limits: PlatformLimits) {
    let validated = validate_field(&FieldDescription::new("x".repeat(101), "ok"), &limits);

    assert_eq!(
        validated
            .diagnostics
            .first()
            .map(|diagnostic| diagnostic.context.as_str()),
        Some("customID is too long: MAX 100 characters")
    );
}

// ============================================================================
// Scenario and idempotence
// ============================================================================

#[rstest]
fn loosely_typed_field_is_normalised_with_three_diagnostics(limits: PlatformLimits) {
    let identifier = "a".repeat(150);
    let description = FieldDescription::new(identifier.clone(), "ok")
        .with_style("bogus")
        .with_required("yes");

    let validated = validate_field(&description, &limits);

    assert_eq!(
        validated.value,
        TextInput {
            identifier: Some(identifier),
            label: Some("ok".to_owned()),
            style: TextInputStyle::Short,
            placeholder: None,
            required: false,
        }
    );
    assert_eq!(validated.diagnostics.len(), 3);
}

#[rstest]
#[case(FieldDescription::new("topic", "Topic"))]
#[case(FieldDescription::new("topic", "Topic").with_style("bogus").with_required("yes"))]
#[case(FieldDescription::new("body", "Body").with_style("Paragraph").with_placeholder("…"))]
fn revalidating_a_normalised_field_is_stable(
    limits: PlatformLimits,
    #[case] description: FieldDescription,
) {
    let first = validate_field(&description, &limits);

    let second = validate_field(&FieldDescription::from(&first.value), &limits);

    assert_eq!(second.value, first.value);
    assert!(second.is_clean());
}

#[rstest]
fn descriptions_deserialise_from_bot_configuration() {
    let description: FieldDescription = serde_json::from_value(json!({
        "customID": "title",
        "label": "What is the title of the announcement?",
        "style": "TextInputStyle.Short",
        "placeholder": "Placeholder",
        "required": true
    }))
    .expect("valid description");

    let validated = validate_field(&description, &PlatformLimits::default());

    assert_eq!(validated.value.identifier.as_deref(), Some("title"));
    assert!(validated.value.required);
    assert!(validated.is_clean());
}
