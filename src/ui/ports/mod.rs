//! Port trait definitions for the UI subsystem.
//!
//! Ports define the interfaces the builders require from the outside world:
//! the platform SDK's component layer and the application's logging sink.

pub mod components;
pub mod reporter;

pub use components::ComponentFactory;
pub use reporter::{DiagnosticReporter, ReporterError, ReporterResult};
