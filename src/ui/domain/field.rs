//! Text input descriptions, their normalised form and the platform component.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

const TEXT_INPUT_COMPONENT_TYPE: u8 = 4;

/// Visual style of a text input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextInputStyle {
    /// Single-line input.
    #[default]
    Short,
    /// Multi-line input.
    Paragraph,
}

impl TextInputStyle {
    /// Resolves a style name.
    ///
    /// Accepts the bare names (`Short`, `Paragraph`) and the qualified forms
    /// used by bot configuration files (`TextInputStyle.Short`).
    ///
    /// # Examples
    ///
    /// ```
    /// use chatform::ui::domain::TextInputStyle;
    ///
    /// assert_eq!(TextInputStyle::parse("Paragraph"), Some(TextInputStyle::Paragraph));
    /// assert_eq!(TextInputStyle::parse("TextInputStyle.Short"), Some(TextInputStyle::Short));
    /// assert_eq!(TextInputStyle::parse("bogus"), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let name = raw.strip_prefix("TextInputStyle.").unwrap_or(raw);
        match name {
            "Short" => Some(Self::Short),
            "Paragraph" => Some(Self::Paragraph),
            _ => None,
        }
    }

    /// Returns the canonical style name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Paragraph => "Paragraph",
        }
    }

    /// Returns the platform's numeric style code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Short => 1,
            Self::Paragraph => 2,
        }
    }
}

impl Serialize for TextInputStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Loosely typed description of one text input, as supplied by callers.
///
/// Every property is optional at the type level so that descriptions read
/// from configuration files can be diagnosed rather than rejected outright.
/// `style` and `required` accept any JSON value; an explicit `null` is kept
/// as `Some(Value::Null)` and diagnosed like any other invalid value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDescription {
    /// Custom id reported back when the modal is submitted.
    #[serde(
        default,
        rename = "customID",
        alias = "customId",
        alias = "identifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub identifier: Option<String>,
    /// Label shown above the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Style name; see [`TextInputStyle::parse`].
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub style: Option<Value>,
    /// Placeholder shown while the input is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Whether the input must be filled; any JSON value is accepted here.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub required: Option<Value>,
}

impl FieldDescription {
    /// Creates a description with an identifier and a label.
    #[must_use]
    pub fn new(identifier: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Sets the style name.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(Value::String(style.into()));
        self
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the raw `required` value.
    #[must_use]
    pub fn with_required(mut self, required: impl Into<Value>) -> Self {
        self.required = Some(required.into());
        self
    }
}

// Absent keys fall back to `default`; a key that is present, even as `null`,
// is kept.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// A text input after validation and normalisation.
///
/// Identifier and label stay optional: a missing one is diagnosed by the
/// validator and rejected later by the component factory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Custom id, if one was supplied.
    pub identifier: Option<String>,
    /// Label, if one was supplied.
    pub label: Option<String>,
    /// Resolved style.
    pub style: TextInputStyle,
    /// Placeholder, if one was supplied.
    pub placeholder: Option<String>,
    /// Resolved `required` flag.
    pub required: bool,
}

impl From<&TextInput> for FieldDescription {
    fn from(input: &TextInput) -> Self {
        Self {
            identifier: input.identifier.clone(),
            label: input.label.clone(),
            style: Some(Value::String(input.style.as_str().to_owned())),
            placeholder: input.placeholder.clone(),
            required: Some(Value::Bool(input.required)),
        }
    }
}

/// The platform's text input component, ready for transmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextInputComponent {
    #[serde(rename = "type")]
    component_type: u8,
    /// Custom id.
    pub custom_id: String,
    /// Label.
    pub label: String,
    /// Style.
    pub style: TextInputStyle,
    /// Placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Whether the input must be filled.
    pub required: bool,
}

impl TextInputComponent {
    /// Creates a short, optional text input.
    #[must_use]
    pub fn new(custom_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            component_type: TEXT_INPUT_COMPONENT_TYPE,
            custom_id: custom_id.into(),
            label: label.into(),
            style: TextInputStyle::Short,
            placeholder: None,
            required: false,
        }
    }

    /// Sets the style.
    #[must_use]
    pub const fn with_style(mut self, style: TextInputStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: Option<String>) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Sets the `required` flag.
    #[must_use]
    pub const fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}
