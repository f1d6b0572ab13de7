//! Modal descriptions and assembled modals.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{FieldDescription, Row};

/// Name used for the modal identifier in findings.
pub const MODAL_CUSTOM_ID: &str = "modal customID";
/// Name used for the modal title in findings.
pub const MODAL_TITLE: &str = "modal title";
/// Name used for the modal rows in findings.
pub const MODAL_ROWS: &str = "modal rows";

/// One entry of a modal's `rows` list.
///
/// An entry whose properties have the wrong JSON types is kept as
/// [`RowDescription::Malformed`] so that it costs only its own row.
///
/// # Examples
///
/// ```
/// use chatform::ui::domain::RowDescription;
/// use serde_json::json;
///
/// let row: RowDescription =
///     serde_json::from_value(json!({ "customID": "b", "label": 42 })).expect("any JSON value");
///
/// assert!(matches!(row, RowDescription::Malformed(_)));
/// assert_eq!(row.identifier().as_deref(), Some("b"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowDescription {
    /// A text input description.
    Field(FieldDescription),
    /// A value that does not describe a text input.
    Malformed(Value),
}

impl RowDescription {
    /// Returns the row's custom id as written, if one can be found.
    ///
    /// Non-string ids of malformed rows are rendered as JSON.
    #[must_use]
    pub fn identifier(&self) -> Option<String> {
        match self {
            Self::Field(field) => field.identifier.clone(),
            Self::Malformed(value) => ["customID", "customId", "identifier"]
                .into_iter()
                .find_map(|key| value.get(key))
                .map(|id| id.as_str().map_or_else(|| id.to_string(), str::to_owned)),
        }
    }
}

impl From<FieldDescription> for RowDescription {
    fn from(field: FieldDescription) -> Self {
        Self::Field(field)
    }
}

/// Loosely typed description of a modal dialog.
///
/// # Examples
///
/// ```
/// use chatform::ui::domain::ModalDescription;
///
/// let modal: ModalDescription = serde_json::from_str(
///     r#"{
///         "customID": "announcement",
///         "title": "Create an announcement",
///         "rows": [{ "customID": "title", "label": "Title", "required": true }]
///     }"#,
/// )
/// .expect("valid JSON");
///
/// assert_eq!(modal.rows.as_ref().map(Vec::len), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModalDescription {
    /// Custom id reported back on submission.
    #[serde(
        default,
        rename = "customID",
        alias = "customId",
        alias = "identifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub identifier: Option<String>,
    /// Title shown at the top of the dialog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Row descriptions in on-screen order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<RowDescription>>,
}

impl ModalDescription {
    /// Creates a description with an identifier, a title and no rows.
    #[must_use]
    pub fn new(identifier: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            identifier: Some(identifier.into()),
            title: Some(title.into()),
            rows: Some(Vec::new()),
        }
    }

    /// Appends a row description.
    #[must_use]
    pub fn with_row(mut self, row: FieldDescription) -> Self {
        self.rows.get_or_insert_with(Vec::new).push(row.into());
        self
    }

    /// Returns the names of absent or empty modal-level properties.
    ///
    /// An empty rows list is not missing.
    #[must_use]
    pub fn missing_properties(&self) -> Vec<&'static str> {
        [
            (MODAL_CUSTOM_ID, is_blank(self.identifier.as_deref())),
            (MODAL_TITLE, is_blank(self.title.as_deref())),
            (MODAL_ROWS, self.rows.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }
}

/// A modal ready to be shown by the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssembledModal {
    /// Custom id as described; `None` or empty makes the modal unsubmittable.
    pub custom_id: Option<String>,
    /// Title, absent when the description lacked one.
    pub title: Option<String>,
    /// Rows that survived assembly, in input order.
    #[serde(rename = "components")]
    pub rows: Vec<Row>,
}

impl AssembledModal {
    /// Returns `true` when the platform would accept this modal.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !is_blank(self.custom_id.as_deref())
            && !is_blank(self.title.as_deref())
            && !self.rows.is_empty()
    }

    /// Returns the custom ids of the rows, in order.
    #[must_use]
    pub fn row_ids(&self) -> Vec<&str> {
        self.rows.iter().map(Row::custom_id).collect()
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}
