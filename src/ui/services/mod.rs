//! Application services for the UI subsystem.
//!
//! The free functions ([`assemble_modal`], [`create_embed`]) are pure and
//! return a value plus its diagnostics. The services wrap them and forward
//! the diagnostics to a [`DiagnosticReporter`](crate::ui::ports::DiagnosticReporter).

mod embed;
mod modal;
mod reporting;

pub use embed::{EmbedService, create_embed};
pub use modal::{ModalService, assemble_modal};
pub use reporting::report_all;
