//! Adapters for the UI ports.
//!
//! # Available Adapters
//!
//! - [`platform::PlatformComponentFactory`]: the default component factory
//! - [`tracing_reporter::TracingReporter`]: logs diagnostics via `tracing`
//! - [`memory::InMemoryReporter`]: thread-safe collector for tests

pub mod memory;
pub mod platform;
pub mod tracing_reporter;

pub use memory::InMemoryReporter;
pub use platform::PlatformComponentFactory;
pub use tracing_reporter::TracingReporter;
