//! Text input field validation.

use crate::ui::{
    config::PlatformLimits,
    domain::{Diagnostic, FieldDescription, TextInput, Validated},
    error::BuildError,
    validation::rules,
};

/// Name used for the text input identifier in findings.
pub const FIELD_CUSTOM_ID: &str = "customID";
/// Name used for the text input label in findings.
pub const FIELD_LABEL: &str = "label";
/// Name used for the text input placeholder in findings.
pub const FIELD_PLACEHOLDER: &str = "placeholder";

/// Validates and normalises one text input description.
///
/// Every check runs regardless of earlier findings. Length violations are
/// reported but the value is kept; an unknown style becomes
/// [`TextInputStyle::Short`](crate::ui::domain::TextInputStyle::Short) and a
/// non-boolean `required` becomes `false`. A missing identifier or label is
/// reported and left absent.
///
/// # Examples
///
/// ```
/// use chatform::ui::{
///     config::PlatformLimits,
///     domain::{FieldDescription, TextInputStyle},
///     validation::validate_field,
/// };
///
/// let description = FieldDescription::new("topic", "Topic")
///     .with_style("bogus")
///     .with_required("yes");
/// let validated = validate_field(&description, &PlatformLimits::default());
///
/// assert_eq!(validated.value.style, TextInputStyle::Short);
/// assert!(!validated.value.required);
/// assert_eq!(validated.diagnostics.len(), 2);
/// ```
#[must_use]
pub fn validate_field(
    description: &FieldDescription,
    limits: &PlatformLimits,
) -> Validated<TextInput> {
    let mut diagnostics = Vec::new();

    check_required_text(
        &mut diagnostics,
        FIELD_CUSTOM_ID,
        description.identifier.as_deref(),
        limits.max_identifier_length,
    );
    check_required_text(
        &mut diagnostics,
        FIELD_LABEL,
        description.label.as_deref(),
        limits.max_label_length,
    );

    let style = rules::resolve_style(description.style.as_ref()).unwrap_or_else(|error| {
        diagnostics.push(Diagnostic::auto_corrected(
            error,
            "style is not a valid TextInputStyle, auto assigning TextInputStyle.Short",
        ));
        Default::default()
    });

    if let Some(placeholder) = description.placeholder.as_deref()
        && let Err(error) =
            rules::check_length(FIELD_PLACEHOLDER, placeholder, limits.max_placeholder_length)
    {
        diagnostics.push(too_long(error, FIELD_PLACEHOLDER, limits.max_placeholder_length));
    }

    let required = rules::resolve_required(description.required.as_ref()).unwrap_or_else(|error| {
        diagnostics.push(Diagnostic::auto_corrected(
            error,
            "required is not a boolean, auto assigning false",
        ));
        false
    });

    Validated::with_diagnostics(
        TextInput {
            identifier: description.identifier.clone(),
            label: description.label.clone(),
            style,
            placeholder: description.placeholder.clone(),
            required,
        },
        diagnostics,
    )
}

fn check_required_text(
    diagnostics: &mut Vec<Diagnostic>,
    property: &'static str,
    value: Option<&str>,
    max: usize,
) {
    match value {
        None => diagnostics.push(Diagnostic::unresolved(
            BuildError::missing(property),
            format!("{property} is not defined"),
        )),
        Some(text) => {
            if let Err(error) = rules::check_length(property, text, max) {
                diagnostics.push(too_long(error, property, max));
            }
        }
    }
}

fn too_long(error: BuildError, property: &str, max: usize) -> Diagnostic {
    Diagnostic::passed_through(error, format!("{property} is too long: MAX {max} characters"))
}
