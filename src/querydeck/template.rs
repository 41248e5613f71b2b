//! URL templates.
//!
//! A template carries the [`PLACEHOLDER`] exactly once; expansion replaces it with the
//! percent-encoded query text. Encoding follows `urlencoding::encode`: everything
//! outside the RFC 3986 unreserved set is escaped and spaces become `%20`, so the
//! result always decodes back with `urlencoding::decode`.

use crate::error::{QueryDeckError, Result};

pub const PLACEHOLDER: &str = "{q}";

pub fn placeholder_count(template: &str) -> usize {
    template.matches(PLACEHOLDER).count()
}

pub fn validate(template: &str) -> Result<()> {
    match placeholder_count(template) {
        1 => Ok(()),
        0 => Err(QueryDeckError::InvalidTemplate(format!(
            "'{}' is missing the {} placeholder",
            template, PLACEHOLDER
        ))),
        n => Err(QueryDeckError::InvalidTemplate(format!(
            "'{}' contains the {} placeholder {} times, expected once",
            template, PLACEHOLDER, n
        ))),
    }
}

pub fn encode(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// Substitutes the encoded `text` for the placeholder. Empty text yields an empty slot.
pub fn expand(template: &str, text: &str) -> String {
    template.replacen(PLACEHOLDER, &encode(text), 1)
}
