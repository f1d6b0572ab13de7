//! Unit tests for the UI module.
//!
//! Tests are organised by component: field validation, modal assembly,
//! embed construction and the reporting services.

mod field_validation_tests;
