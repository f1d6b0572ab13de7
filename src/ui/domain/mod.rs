//! Domain types for embeds, modals and diagnostics.
//!
//! Descriptions (`*Description`) are the loosely typed values callers supply;
//! payloads ([`Embed`], [`Row`], [`AssembledModal`], [`TextInputComponent`])
//! are what the platform SDK receives.

mod color;
mod diagnostic;
mod embed;
mod field;
mod modal;
mod row;

pub use color::Color;
pub use diagnostic::{Diagnostic, Resolution, Validated};
pub use embed::{
    AuthorDescription, ERROR_EMBED_DESCRIPTION, ERROR_EMBED_TITLE, Embed, EmbedAuthor,
    EmbedDescription, EmbedField, EmbedFieldDescription, EmbedFooter, EmbedMedia,
    FooterDescription, error_embed,
};
pub use field::{FieldDescription, TextInput, TextInputComponent, TextInputStyle};
pub use modal::{
    AssembledModal, MODAL_CUSTOM_ID, MODAL_ROWS, MODAL_TITLE, ModalDescription, RowDescription,
};
pub use row::Row;
