//! Embed descriptions and the platform embed payload.

use serde::{Deserialize, Serialize};

use super::Color;

/// Title of the fallback error embed.
pub const ERROR_EMBED_TITLE: &str = "❗️ Error";
/// Description of the fallback error embed.
pub const ERROR_EMBED_DESCRIPTION: &str = "Invalid properties were given to create the embed";

/// Footer as supplied by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterDescription {
    /// Footer text.
    #[serde(default)]
    pub text: Option<String>,
    /// Footer icon URL.
    #[serde(default, rename = "iconURL", alias = "iconUrl")]
    pub icon_url: Option<String>,
}

/// Author block as supplied by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDescription {
    /// Author name.
    #[serde(default)]
    pub name: Option<String>,
    /// Author icon URL.
    #[serde(default, rename = "iconURL", alias = "iconUrl")]
    pub icon_url: Option<String>,
    /// Link opened when the author name is clicked.
    #[serde(default)]
    pub url: Option<String>,
}

/// One name/value field as supplied by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFieldDescription {
    /// Field name.
    #[serde(default)]
    pub name: String,
    /// Field value.
    #[serde(default)]
    pub value: String,
    /// Whether the field sits inline with its neighbours.
    #[serde(default)]
    pub inline: bool,
}

impl EmbedFieldDescription {
    /// Creates a field description.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

/// Loosely typed description of an embed.
///
/// Empty strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedDescription {
    /// Title.
    #[serde(default)]
    pub title: Option<String>,
    /// Body text.
    #[serde(default)]
    pub description: Option<String>,
    /// Accent colour as a hex string.
    #[serde(default)]
    pub color: Option<String>,
    /// Footer.
    #[serde(default)]
    pub footer: Option<FooterDescription>,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Main image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Author block.
    #[serde(default)]
    pub author: Option<AuthorDescription>,
    /// Fields; at most five are recommended.
    #[serde(default)]
    pub fields: Vec<EmbedFieldDescription>,
}

impl EmbedDescription {
    /// Creates a description holding only a title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Returns `true` when at least one visible property is present.
    #[must_use]
    pub fn has_content(&self) -> bool {
        [&self.title, &self.description, &self.image]
            .into_iter()
            .any(|value| value.as_deref().is_some_and(|text| !text.is_empty()))
            || !self.fields.is_empty()
    }
}

/// Embed footer payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedFooter {
    /// Footer text.
    pub text: String,
    /// Footer icon URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Embed author payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedAuthor {
    /// Author name.
    pub name: String,
    /// Author icon URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Author link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Embed image or thumbnail payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedMedia {
    /// Media URL.
    pub url: String,
}

impl EmbedMedia {
    /// Wraps a URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Embed field payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: String,
    /// Whether the field sits inline.
    pub inline: bool,
}

/// The platform embed payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Embed {
    /// Title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Accent colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    /// Thumbnail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,
    /// Main image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,
    /// Author block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    /// Fields in input order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

/// Builds the canned embed shown when the requested one cannot be built.
///
/// A fresh value is constructed on every call.
///
/// # Examples
///
/// ```
/// use chatform::ui::domain::{error_embed, Color};
///
/// let embed = error_embed();
/// assert_eq!(embed.color, Some(Color::RED));
/// assert_eq!(embed.title.as_deref(), Some("❗️ Error"));
/// ```
#[must_use]
pub fn error_embed() -> Embed {
    Embed {
        title: Some(ERROR_EMBED_TITLE.to_owned()),
        description: Some(ERROR_EMBED_DESCRIPTION.to_owned()),
        color: Some(Color::RED),
        ..Embed::default()
    }
}
