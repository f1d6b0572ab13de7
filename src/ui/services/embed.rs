//! Embed construction.

use std::sync::Arc;

use crate::ui::{
    config::PlatformLimits,
    domain::{Diagnostic, Embed, EmbedDescription, Validated, error_embed},
    error::BuildError,
    ports::reporter::DiagnosticReporter,
    services::reporting::report_all,
    validation::embed::{build_fields, build_properties},
};

const EMPTY_CONTEXT: &str = "Invalid properties were given to create the embed";
const PROPERTIES_CONTEXT: &str = "Error setting properties of the embed";
const FIELDS_CONTEXT: &str = "Error adding fields to the embed";
const FIELD_COUNT_CONTEXT: &str = "Embed exceeds the recommended number of fields";

/// Builds an embed from its description.
///
/// Returns the fallback [`error_embed`] with one diagnostic when none of
/// title, description, image or fields is present, or when the platform
/// would reject a property or a field. Otherwise every present property is
/// copied verbatim.
///
/// # Examples
///
/// ```
/// use chatform::ui::{
///     config::PlatformLimits,
///     domain::{EmbedDescription, error_embed},
///     services::create_embed,
/// };
///
/// let limits = PlatformLimits::default();
///
/// let built = create_embed(&EmbedDescription::titled("Hi"), &limits);
/// assert_eq!(built.value.title.as_deref(), Some("Hi"));
/// assert!(built.is_clean());
///
/// let fallback = create_embed(&EmbedDescription::default(), &limits);
/// assert_eq!(fallback.value, error_embed());
/// ```
#[must_use]
pub fn create_embed(description: &EmbedDescription, limits: &PlatformLimits) -> Validated<Embed> {
    if !description.has_content() {
        return fallback(BuildError::EmptyEmbed, EMPTY_CONTEXT);
    }

    let mut embed = match build_properties(description, limits) {
        Ok(embed) => embed,
        Err(error) => return fallback(error.into(), PROPERTIES_CONTEXT),
    };

    embed.fields = match build_fields(&description.fields, limits) {
        Ok(fields) => fields,
        Err(error) => return fallback(error.into(), FIELDS_CONTEXT),
    };

    let mut diagnostics = Vec::new();
    if embed.fields.len() > limits.recommended_embed_fields {
        diagnostics.push(Diagnostic::passed_through(
            BuildError::TooManyEmbedFields {
                recommended: limits.recommended_embed_fields,
                actual: embed.fields.len(),
            },
            FIELD_COUNT_CONTEXT,
        ));
    }

    Validated::with_diagnostics(embed, diagnostics)
}

fn fallback(error: BuildError, context: &str) -> Validated<Embed> {
    Validated::with_diagnostics(error_embed(), vec![Diagnostic::fallback(error, context)])
}

/// Service that builds embeds and reports their diagnostics.
#[derive(Clone)]
pub struct EmbedService<R>
where
    R: DiagnosticReporter,
{
    reporter: Arc<R>,
    limits: PlatformLimits,
}

impl<R> EmbedService<R>
where
    R: DiagnosticReporter,
{
    /// Creates a service using the platform's default limits.
    #[must_use]
    pub fn new(reporter: Arc<R>) -> Self {
        Self {
            reporter,
            limits: PlatformLimits::default(),
        }
    }

    /// Replaces the limits applied by the validators.
    #[must_use]
    pub fn with_limits(mut self, limits: PlatformLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Builds an embed, reports its diagnostics and returns both.
    #[must_use]
    pub fn assemble(&self, description: &EmbedDescription) -> Validated<Embed> {
        let validated = create_embed(description, &self.limits);
        report_all(self.reporter.as_ref(), &validated.diagnostics);
        validated
    }

    /// Builds an embed, reports its diagnostics and returns the embed.
    #[must_use]
    pub fn build(&self, description: &EmbedDescription) -> Embed {
        self.assemble(description).value
    }
}
