//! Validation for text inputs and embeds.
//!
//! [`rules`] holds the single-property checks; [`field`] and [`embed`]
//! combine them for a whole description.

pub mod embed;
pub mod field;
pub mod rules;

pub use field::validate_field;
