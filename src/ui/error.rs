//! Error types for payload validation and platform rejections.
//!
//! Uses `thiserror` for typed variants that callers can inspect. None of
//! these errors abort a build on their own: they travel inside
//! [`Diagnostic`](super::domain::Diagnostic) records next to the value that
//! was built anyway.

use thiserror::Error;

/// Findings raised while validating or assembling a payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A property required by contract is absent.
    #[error("{property} is not defined")]
    Missing {
        /// Name of the absent property.
        property: &'static str,
    },

    /// A property exceeds its platform length limit.
    #[error("{property} is too long: {actual} characters exceeds MAX {max}")]
    TooLong {
        /// Name of the offending property.
        property: &'static str,
        /// The platform limit in characters.
        max: usize,
        /// The actual length in characters.
        actual: usize,
    },

    /// The text input style is not one of the recognised values.
    #[error("'{0}' is not a valid TextInputStyle")]
    InvalidStyle(String),

    /// The `required` flag was given a non-boolean value.
    #[error("required is not a boolean: got {0}")]
    RequiredNotBoolean(String),

    /// One or more modal-level properties are absent.
    #[error("one or more modal properties are not defined: {}", .0.join(", "))]
    ModalPropertiesMissing(Vec<&'static str>),

    /// A row entry does not describe a text input.
    #[error("row is not a valid text input description: {0}")]
    MalformedRow(String),

    /// The modal holds more rows than the platform renders.
    #[error("modal has {actual} rows, exceeds platform limit of {max}")]
    TooManyRows {
        /// The platform limit.
        max: usize,
        /// The number of row descriptions supplied.
        actual: usize,
    },

    /// None of the properties that make an embed visible were supplied.
    #[error("invalid properties were given to create the embed")]
    EmptyEmbed,

    /// The embed carries more fields than recommended.
    #[error("embed has {actual} fields, exceeds recommended maximum of {recommended}")]
    TooManyEmbedFields {
        /// The recommended maximum.
        recommended: usize,
        /// The actual number of fields.
        actual: usize,
    },

    /// The platform component layer rejected a value.
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

impl BuildError {
    /// Creates a missing-property error.
    #[must_use]
    pub const fn missing(property: &'static str) -> Self {
        Self::Missing { property }
    }

    /// Creates a too-long error.
    #[must_use]
    pub const fn too_long(property: &'static str, max: usize, actual: usize) -> Self {
        Self::TooLong {
            property,
            max,
            actual,
        }
    }
}

/// Rejections raised by the platform component layer.
///
/// These mirror the checks the chat platform's SDK performs when a builder
/// is turned into a wire payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlatformError {
    /// A text input has no custom id.
    #[error("text input requires a custom id")]
    MissingCustomId,

    /// A text input has no label.
    #[error("text input requires a label")]
    MissingLabel,

    /// A colour string could not be resolved.
    #[error("invalid colour '{0}': expected a hex code such as #FF0000")]
    InvalidColor(String),

    /// A property the platform requires to be non-empty is empty.
    #[error("{property} must not be empty")]
    EmptyProperty {
        /// Name of the empty property.
        property: &'static str,
    },

    /// A property exceeds the platform's hard limit.
    #[error("{property} exceeds platform limit of {max} characters (got {actual})")]
    PropertyTooLong {
        /// Name of the offending property.
        property: &'static str,
        /// The platform limit in characters.
        max: usize,
        /// The actual length in characters.
        actual: usize,
    },

    /// An embed holds more fields than the platform accepts.
    #[error("embed cannot hold more than {max} fields, got {actual}")]
    TooManyFields {
        /// The platform limit.
        max: usize,
        /// The actual number of fields.
        actual: usize,
    },
}
