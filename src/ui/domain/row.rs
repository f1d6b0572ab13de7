//! Action rows.

use serde::{Serialize, Serializer, ser::SerializeSeq};

use super::TextInputComponent;

const ACTION_ROW_COMPONENT_TYPE: u8 = 1;

/// A layout row holding exactly one text input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    #[serde(rename = "type")]
    component_type: u8,
    #[serde(rename = "components", serialize_with = "serialize_single")]
    component: TextInputComponent,
}

impl Row {
    /// Wraps a component into a row.
    #[must_use]
    pub const fn new(component: TextInputComponent) -> Self {
        Self {
            component_type: ACTION_ROW_COMPONENT_TYPE,
            component,
        }
    }

    /// Returns the wrapped component.
    #[must_use]
    pub const fn component(&self) -> &TextInputComponent {
        &self.component
    }

    /// Returns the custom id of the wrapped component.
    #[must_use]
    pub fn custom_id(&self) -> &str {
        &self.component.custom_id
    }

    /// Unwraps the component.
    #[must_use]
    pub fn into_component(self) -> TextInputComponent {
        self.component
    }
}

fn serialize_single<S: Serializer>(
    component: &TextInputComponent,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(1))?;
    seq.serialize_element(component)?;
    seq.end()
}
