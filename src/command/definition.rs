//! Slash-command definition.

use serde::{Deserialize, Serialize};

use super::CommandError;

const MAX_NAME_LENGTH: usize = 32;
const MAX_DESCRIPTION_LENGTH: usize = 100;

/// Name and description a slash command is registered under.
///
/// Registration itself belongs to the application's command framework; this
/// type only carries and checks the values handed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    /// Command name without the leading slash.
    pub name: String,
    /// Human-readable description.
    pub description: String,
}

impl CommandDefinition {
    /// Creates a definition; the name is lower-cased.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into().to_lowercase(),
            description: description.into(),
        }
    }

    /// Checks the definition against the platform's naming rules.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidCommandName`] for an empty, over-long
    /// or malformed name, and [`CommandError::InvalidDescription`] for an
    /// empty or over-long description.
    pub fn validate(&self) -> Result<(), CommandError> {
        let name_length = self.name.chars().count();
        if name_length == 0 || name_length > MAX_NAME_LENGTH || !is_valid_name(&self.name) {
            return Err(CommandError::InvalidCommandName(self.name.clone()));
        }

        let description_length = self.description.chars().count();
        if description_length == 0 || description_length > MAX_DESCRIPTION_LENGTH {
            return Err(CommandError::InvalidDescription {
                command: self.name.clone(),
                reason: format!("expected 1-{MAX_DESCRIPTION_LENGTH} characters"),
            });
        }

        Ok(())
    }
}

fn is_valid_name(value: &str) -> bool {
    value.chars().all(|character| {
        character.is_ascii_lowercase()
            || character.is_ascii_digit()
            || matches!(character, '-' | '_')
    })
}
