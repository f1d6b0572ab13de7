//! Platform limits applied by the validators.

use serde::{Deserialize, Serialize};

/// Length and count limits imposed by the chat platform.
///
/// Defaults match the platform's published limits. Applications may load
/// overrides from JSON; absent keys keep their defaults.
///
/// # Examples
///
/// ```
/// use chatform::ui::config::PlatformLimits;
///
/// let limits = PlatformLimits::default();
/// assert_eq!(limits.max_label_length, 45);
///
/// let tuned = PlatformLimits::from_json(r#"{ "max_modal_rows": 3 }"#).expect("valid JSON");
/// assert_eq!(tuned.max_modal_rows, 3);
/// assert_eq!(tuned.max_identifier_length, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformLimits {
    /// Maximum custom id length for modals and text inputs.
    pub max_identifier_length: usize,
    /// Maximum text input label length.
    pub max_label_length: usize,
    /// Maximum text input placeholder length.
    pub max_placeholder_length: usize,
    /// Maximum modal title length.
    pub max_modal_title_length: usize,
    /// Maximum number of rows in a modal.
    pub max_modal_rows: usize,
    /// Maximum embed title length.
    pub max_embed_title_length: usize,
    /// Maximum embed description length.
    pub max_embed_description_length: usize,
    /// Maximum embed footer text length.
    pub max_embed_footer_length: usize,
    /// Maximum embed author name length.
    pub max_embed_author_length: usize,
    /// Maximum embed field name length.
    pub max_embed_field_name_length: usize,
    /// Maximum embed field value length.
    pub max_embed_field_value_length: usize,
    /// Hard limit on embed fields.
    pub max_embed_fields: usize,
    /// Number of embed fields above which an advisory is raised.
    pub recommended_embed_fields: usize,
}

impl Default for PlatformLimits {
    fn default() -> Self {
        Self {
            max_identifier_length: 100,
            max_label_length: 45,
            max_placeholder_length: 100,
            max_modal_title_length: 45,
            max_modal_rows: 5,
            max_embed_title_length: 256,
            max_embed_description_length: 4096,
            max_embed_footer_length: 2048,
            max_embed_author_length: 256,
            max_embed_field_name_length: 256,
            max_embed_field_value_length: 1024,
            max_embed_fields: 25,
            recommended_embed_fields: 5,
        }
    }
}

impl PlatformLimits {
    /// Parses limits from JSON, filling absent keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the input is not a valid limits
    /// object.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Creates limits that never raise length findings.
    ///
    /// Useful when descriptions are known to be pre-validated.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            max_identifier_length: usize::MAX,
            max_label_length: usize::MAX,
            max_placeholder_length: usize::MAX,
            max_modal_title_length: usize::MAX,
            max_modal_rows: usize::MAX,
            recommended_embed_fields: usize::MAX,
            ..Self::default()
        }
    }
}
