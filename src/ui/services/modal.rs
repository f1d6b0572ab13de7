//! Modal assembly.

use std::sync::Arc;

use serde_json::Value;

use crate::ui::{
    config::PlatformLimits,
    domain::{
        AssembledModal, Diagnostic, FieldDescription, MODAL_CUSTOM_ID, MODAL_TITLE,
        ModalDescription, Row, RowDescription, Validated,
    },
    error::BuildError,
    ports::{components::ComponentFactory, reporter::DiagnosticReporter},
    services::reporting::report_all,
    validation::{rules, validate_field},
};

const MODAL_CONTEXT: &str = "Error creating modal";
const UNDEFINED_ROW: &str = "<undefined>";

/// Assembles a modal from its description.
///
/// Missing modal-level properties and over-long values are reported but do
/// not stop assembly. Each row is validated, handed to `factory` and wrapped
/// into a [`Row`]; a malformed row or one the factory rejects is dropped with
/// a [`Resolution::Skipped`](crate::ui::domain::Resolution::Skipped)
/// diagnostic and assembly continues with the next row. Surviving rows keep their
/// input order.
///
/// # Examples
///
/// ```
/// use chatform::ui::{
///     adapters::PlatformComponentFactory,
///     config::PlatformLimits,
///     domain::{FieldDescription, ModalDescription},
///     services::assemble_modal,
/// };
///
/// let description = ModalDescription::new("feedback", "Send feedback")
///     .with_row(FieldDescription::new("summary", "Summary"))
///     .with_row(FieldDescription::default())
///     .with_row(FieldDescription::new("details", "Details").with_style("Paragraph"));
///
/// let validated = assemble_modal(
///     &description,
///     &PlatformComponentFactory,
///     &PlatformLimits::default(),
/// );
///
/// assert_eq!(validated.value.row_ids(), vec!["summary", "details"]);
/// assert!(validated.is_lossy());
/// ```
#[must_use]
pub fn assemble_modal<F>(
    description: &ModalDescription,
    factory: &F,
    limits: &PlatformLimits,
) -> Validated<AssembledModal>
where
    F: ComponentFactory + ?Sized,
{
    let mut diagnostics = Vec::new();

    let missing = description.missing_properties();
    if !missing.is_empty() {
        diagnostics.push(Diagnostic::unresolved(
            BuildError::ModalPropertiesMissing(missing),
            MODAL_CONTEXT,
        ));
    }
    if let Some(identifier) = description.identifier.as_deref()
        && let Err(error) =
            rules::check_length(MODAL_CUSTOM_ID, identifier, limits.max_identifier_length)
    {
        diagnostics.push(Diagnostic::passed_through(error, MODAL_CONTEXT));
    }
    if let Some(title) = description.title.as_deref()
        && let Err(error) = rules::check_length(MODAL_TITLE, title, limits.max_modal_title_length)
    {
        diagnostics.push(Diagnostic::passed_through(error, MODAL_CONTEXT));
    }

    let descriptions = description.rows.as_deref().unwrap_or_default();
    if descriptions.len() > limits.max_modal_rows {
        diagnostics.push(Diagnostic::passed_through(
            BuildError::TooManyRows {
                max: limits.max_modal_rows,
                actual: descriptions.len(),
            },
            MODAL_CONTEXT,
        ));
    }

    let rows = descriptions
        .iter()
        .filter_map(|row| build_row(row, factory, limits, &mut diagnostics))
        .collect();

    Validated::with_diagnostics(
        AssembledModal {
            custom_id: description.identifier.clone(),
            title: description.title.clone(),
            rows,
        },
        diagnostics,
    )
}

fn build_row<F>(
    description: &RowDescription,
    factory: &F,
    limits: &PlatformLimits,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Row>
where
    F: ComponentFactory + ?Sized,
{
    let result = match description {
        RowDescription::Field(field) => build_component(field, factory, limits, diagnostics),
        RowDescription::Malformed(value) => Err(malformed(value)),
    };

    match result {
        Ok(row) => Some(row),
        Err(error) => {
            let identifier = description.identifier();
            let row_id = identifier.as_deref().unwrap_or(UNDEFINED_ROW);
            diagnostics.push(Diagnostic::skipped(
                error,
                format!("Error adding row {row_id} to modal"),
            ));
            None
        }
    }
}

fn build_component<F>(
    description: &FieldDescription,
    factory: &F,
    limits: &PlatformLimits,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Row, BuildError>
where
    F: ComponentFactory + ?Sized,
{
    let (input, findings) = validate_field(description, limits).into_parts();
    diagnostics.extend(findings);

    Ok(Row::new(factory.text_input(&input)?))
}

fn malformed(value: &Value) -> BuildError {
    let reason = serde_json::from_value::<FieldDescription>(value.clone())
        .err()
        .map_or_else(|| value.to_string(), |error| error.to_string());
    BuildError::MalformedRow(reason)
}

/// Service that assembles modals and reports their diagnostics.
#[derive(Clone)]
pub struct ModalService<F, R>
where
    F: ComponentFactory,
    R: DiagnosticReporter,
{
    factory: Arc<F>,
    reporter: Arc<R>,
    limits: PlatformLimits,
}

impl<F, R> ModalService<F, R>
where
    F: ComponentFactory,
    R: DiagnosticReporter,
{
    /// Creates a service using the platform's default limits.
    #[must_use]
    pub fn new(factory: Arc<F>, reporter: Arc<R>) -> Self {
        Self {
            factory,
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

    /// Returns the limits in use.
    #[must_use]
    pub const fn limits(&self) -> &PlatformLimits {
        &self.limits
    }

    /// Assembles a modal, reports its diagnostics and returns both.
    #[must_use]
    pub fn assemble(&self, description: &ModalDescription) -> Validated<AssembledModal> {
        let validated = assemble_modal(description, self.factory.as_ref(), &self.limits);
        report_all(self.reporter.as_ref(), &validated.diagnostics);
        validated
    }

    /// Assembles a modal, reports its diagnostics and returns the modal.
    #[must_use]
    pub fn build(&self, description: &ModalDescription) -> AssembledModal {
        self.assemble(description).value
    }
}
