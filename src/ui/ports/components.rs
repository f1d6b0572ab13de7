//! Component factory port.
//!
//! The factory stands in for the platform SDK's text input builder: it turns
//! a normalised [`TextInput`] into the component the platform transmits, and
//! rejects values the SDK would refuse to serialise.

use crate::ui::{
    domain::{TextInput, TextInputComponent},
    error::PlatformError,
};

/// Port for building platform text input components.
///
/// # Implementation Notes
///
/// Implementations must be stateless and thread-safe; one factory is shared
/// by every modal assembled through a service.
pub trait ComponentFactory: Send + Sync {
    /// Builds the component for a normalised text input.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] when the platform would reject the input.
    fn text_input(&self, input: &TextInput) -> Result<TextInputComponent, PlatformError>;
}
