//! Embed property and field checks.
//!
//! These reproduce the rejections the platform SDK raises while copying
//! properties onto an embed builder. Each stage either produces the copied
//! values or the first rejection.

use crate::ui::{
    config::PlatformLimits,
    domain::{
        AuthorDescription, Color, Embed, EmbedAuthor, EmbedDescription, EmbedField,
        EmbedFieldDescription, EmbedFooter, EmbedMedia, FooterDescription,
    },
    error::PlatformError,
    validation::rules::{check_platform_length, non_empty, require_text},
};

/// Copies the scalar properties of a description onto a new embed.
///
/// # Errors
///
/// Returns [`PlatformError`] for an unparsable colour, a footer without
/// text, an author without a name, or text over the platform limits.
pub fn build_properties(
    description: &EmbedDescription,
    limits: &PlatformLimits,
) -> Result<Embed, PlatformError> {
    let mut embed = Embed::default();

    if let Some(title) = non_empty(description.title.as_deref()) {
        check_platform_length("embed title", title, limits.max_embed_title_length)?;
        embed.title = Some(title.to_owned());
    }
    if let Some(text) = non_empty(description.description.as_deref()) {
        check_platform_length(
            "embed description",
            text,
            limits.max_embed_description_length,
        )?;
        embed.description = Some(text.to_owned());
    }
    if let Some(color) = non_empty(description.color.as_deref()) {
        embed.color = Some(color.parse::<Color>()?);
    }
    if let Some(footer) = description.footer.as_ref() {
        embed.footer = Some(build_footer(footer, limits)?);
    }
    embed.thumbnail = non_empty(description.thumbnail.as_deref()).map(EmbedMedia::new);
    embed.image = non_empty(description.image.as_deref()).map(EmbedMedia::new);
    if let Some(author) = description.author.as_ref() {
        embed.author = Some(build_author(author, limits)?);
    }

    Ok(embed)
}

/// Converts field descriptions into embed fields, preserving order.
///
/// # Errors
///
/// Returns [`PlatformError`] when there are more fields than the platform
/// accepts or a field has an empty or over-long name or value.
pub fn build_fields(
    fields: &[EmbedFieldDescription],
    limits: &PlatformLimits,
) -> Result<Vec<EmbedField>, PlatformError> {
    if fields.len() > limits.max_embed_fields {
        return Err(PlatformError::TooManyFields {
            max: limits.max_embed_fields,
            actual: fields.len(),
        });
    }

    fields
        .iter()
        .map(|field| -> Result<EmbedField, PlatformError> {
            let name = require_text("embed field name", Some(field.name.as_str()))?;
            let value = require_text("embed field value", Some(field.value.as_str()))?;
            check_platform_length("embed field name", name, limits.max_embed_field_name_length)?;
            check_platform_length(
                "embed field value",
                value,
                limits.max_embed_field_value_length,
            )?;
            Ok(EmbedField {
                name: name.to_owned(),
                value: value.to_owned(),
                inline: field.inline,
            })
        })
        .collect()
}

fn build_footer(
    footer: &FooterDescription,
    limits: &PlatformLimits,
) -> Result<EmbedFooter, PlatformError> {
    let text = require_text("footer text", footer.text.as_deref())?;
    check_platform_length("footer text", text, limits.max_embed_footer_length)?;
    Ok(EmbedFooter {
        text: text.to_owned(),
        icon_url: non_empty(footer.icon_url.as_deref()).map(str::to_owned),
    })
}

fn build_author(
    author: &AuthorDescription,
    limits: &PlatformLimits,
) -> Result<EmbedAuthor, PlatformError> {
    let name = require_text("author name", author.name.as_deref())?;
    check_platform_length("author name", name, limits.max_embed_author_length)?;
    Ok(EmbedAuthor {
        name: name.to_owned(),
        icon_url: non_empty(author.icon_url.as_deref()).map(str::to_owned),
        url: non_empty(author.url.as_deref()).map(str::to_owned),
    })
}
