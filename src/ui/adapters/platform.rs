//! Default component factory.

use crate::ui::{
    domain::{TextInput, TextInputComponent},
    error::PlatformError,
    ports::components::ComponentFactory,
    validation::rules::non_empty,
};

/// Builds text input components the way the platform SDK does.
///
/// The SDK refuses to serialise a text input without a custom id or a label;
/// every other property is copied as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformComponentFactory;

impl PlatformComponentFactory {
    /// Creates the factory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ComponentFactory for PlatformComponentFactory {
    fn text_input(&self, input: &TextInput) -> Result<TextInputComponent, PlatformError> {
        let custom_id =
            non_empty(input.identifier.as_deref()).ok_or(PlatformError::MissingCustomId)?;
        let label = non_empty(input.label.as_deref()).ok_or(PlatformError::MissingLabel)?;

        Ok(TextInputComponent::new(custom_id, label)
            .with_style(input.style)
            .with_placeholder(input.placeholder.clone())
            .with_required(input.required))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::domain::TextInputStyle;
    use rstest::rstest;

    fn input(identifier: Option<&str>, label: Option<&str>) -> TextInput {
        TextInput {
            identifier: identifier.map(str::to_owned),
            label: label.map(str::to_owned),
            ..TextInput::default()
        }
    }

    #[rstest]
    fn copies_every_property() {
        let source = TextInput {
            identifier: Some("bio".to_owned()),
            label: Some("About you".to_owned()),
            style: TextInputStyle::Paragraph,
            placeholder: Some("Tell us".to_owned()),
            required: true,
        };

        let component = PlatformComponentFactory
            .text_input(&source)
            .expect("complete input builds");

        assert_eq!(component.custom_id, "bio");
        assert_eq!(component.label, "About you");
        assert_eq!(component.style, TextInputStyle::Paragraph);
        assert_eq!(component.placeholder.as_deref(), Some("Tell us"));
        assert!(component.required);
    }

    #[rstest]
    #[case(None, Some("Label"), PlatformError::MissingCustomId)]
    #[case(Some(""), Some("Label"), PlatformError::MissingCustomId)]
    #[case(Some("id"), None, PlatformError::MissingLabel)]
    #[case(Some("id"), Some(""), PlatformError::MissingLabel)]
    fn rejects_missing_identity(
        #[case] identifier: Option<&str>,
        #[case] label: Option<&str>,
        #[case] expected: PlatformError,
    ) {
        assert_eq!(
            PlatformComponentFactory.text_input(&input(identifier, label)),
            Err(expected)
        );
    }

    #[rstest]
    fn over_long_values_are_not_its_concern() {
        let long_id = "a".repeat(150);
        let component = PlatformComponentFactory
            .text_input(&input(Some(&long_id), Some("ok")))
            .expect("length is diagnosed by the validator, not rejected here");
        assert_eq!(component.custom_id, long_id);
    }
}
