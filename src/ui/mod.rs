//! Embed and modal payload builders.
//!
//! This module validates loosely typed embed and modal descriptions against
//! the chat platform's limits and assembles the payloads the platform SDK
//! transmits. Builders never fail outright: each returns a usable value
//! together with the [`domain::Diagnostic`] records raised along the way.
//!
//! # Architecture
//!
//! - **Domain**: descriptions, payloads and diagnostics ([`domain`])
//! - **Validation**: single-property rules and per-description validators
//!   ([`validation`])
//! - **Ports**: the platform component layer and the logging sink ([`ports`])
//! - **Adapters**: default implementations of the ports ([`adapters`])
//! - **Services**: modal assembly and embed construction ([`services`])
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use chatform::ui::{
//!     adapters::{InMemoryReporter, PlatformComponentFactory},
//!     domain::{FieldDescription, ModalDescription},
//!     services::ModalService,
//! };
//!
//! let reporter = Arc::new(InMemoryReporter::new());
//! let service = ModalService::new(Arc::new(PlatformComponentFactory), Arc::clone(&reporter));
//!
//! let modal = service.build(
//!     &ModalDescription::new("newCustomModal", "Create an announcement")
//!         .with_row(FieldDescription::new("title", "Title").with_required(true))
//!         .with_row(FieldDescription::new("body", "Body").with_style("Paragraph")),
//! );
//!
//! assert!(modal.is_submittable());
//! assert_eq!(modal.row_ids(), vec!["title", "body"]);
//! assert!(reporter.is_empty());
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
