//! Individual validation rules.
//!
//! Each rule is a pure function checking one property. Rules return `Ok`
//! with the resolved value or the specific error describing the violation;
//! the caller decides whether the violation is corrected, passed through or
//! fatal for the unit being built.

use serde_json::Value;

use crate::ui::{
    domain::TextInputStyle,
    error::{BuildError, PlatformError},
};

/// Checks that `value` holds at most `max` characters.
///
/// # Errors
///
/// Returns [`BuildError::TooLong`] when the value is over the limit.
pub fn check_length(property: &'static str, value: &str, max: usize) -> Result<(), BuildError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(BuildError::too_long(property, max, actual));
    }
    Ok(())
}

/// Resolves an optional style value; an absent style is [`TextInputStyle::Short`].
///
/// # Errors
///
/// Returns [`BuildError::InvalidStyle`] when the value is not a string or
/// the name is not recognised.
pub fn resolve_style(raw: Option<&Value>) -> Result<TextInputStyle, BuildError> {
    match raw {
        None => Ok(TextInputStyle::default()),
        Some(Value::String(name)) => {
            TextInputStyle::parse(name).ok_or_else(|| BuildError::InvalidStyle(name.clone()))
        }
        Some(other) => Err(BuildError::InvalidStyle(other.to_string())),
    }
}

/// Resolves an optional `required` value; an absent value is `false`.
///
/// # Errors
///
/// Returns [`BuildError::RequiredNotBoolean`] for any non-boolean value,
/// including JSON `null` and the strings `"true"`/`"false"`.
pub fn resolve_required(raw: Option<&Value>) -> Result<bool, BuildError> {
    match raw {
        None => Ok(false),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(other) => Err(BuildError::RequiredNotBoolean(other.to_string())),
    }
}

/// Returns the value when it is present and non-empty.
#[must_use]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

/// Checks a platform text property against its hard limit.
///
/// # Errors
///
/// Returns [`PlatformError::PropertyTooLong`] when the value is over the
/// limit.
pub fn check_platform_length(
    property: &'static str,
    value: &str,
    max: usize,
) -> Result<(), PlatformError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(PlatformError::PropertyTooLong {
            property,
            max,
            actual,
        });
    }
    Ok(())
}

/// Requires a platform text property to be present and non-empty.
///
/// # Errors
///
/// Returns [`PlatformError::EmptyProperty`] otherwise.
pub fn require_text<'a>(
    property: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, PlatformError> {
    non_empty(value).ok_or(PlatformError::EmptyProperty { property })
}
