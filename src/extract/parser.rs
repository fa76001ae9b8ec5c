//! Parsing and validation of raw model output into a bookmark record.
//!
//! The model is instructed to reply with a bare JSON object, but its output
//! is untrusted text: it may carry stray whitespace, prose, or code fences
//! despite the instruction. The parser trims whitespace and then decodes
//! strictly. There are deliberately no repair heuristics beyond the trim --
//! no fence stripping, no brace balancing. A reply that violates the
//! contract fails outright, and the error keeps the raw text verbatim so an
//! operator can see exactly what the model said.

use crate::bookmark::BookmarkRecord;
use serde_json::Value;
use thiserror::Error;

/// How turning model output into a bookmark can fail.
///
/// `Parse` and `Schema` are distinct on purpose: callers can tell garbage
/// ("Sure, here's the bookmark: ...") from a well-formed but incomplete
/// object (missing `title` or `url`).
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The text is not valid JSON, or is valid JSON but not an object.
    #[error("model reply is not a JSON object ({detail})\nReply was: {raw}")]
    Parse {
        /// The decoder's diagnostic.
        detail: String,
        /// The full raw reply, unmodified.
        raw: String,
    },

    /// Well-formed JSON object missing a required field, or the field is
    /// blank after trimming.
    #[error("model reply is missing a usable `{field}` field\nReply was: {raw}")]
    Schema {
        /// Which required field was absent or blank.
        field: &'static str,
        /// The full raw reply, unmodified.
        raw: String,
    },
}

impl ExtractError {
    /// The raw model reply the error was produced from.
    pub fn raw_text(&self) -> &str {
        match self {
            ExtractError::Parse { raw, .. } => raw,
            ExtractError::Schema { raw, .. } => raw,
        }
    }
}

/// Decode and validate raw model output.
///
/// Steps, in order: trim surrounding whitespace, strict JSON-object decode,
/// then an explicit check that `title` and `url` are present and non-empty
/// after trimming. `description` defaults to the empty string and `tags` to
/// the empty list; tag order is preserved. Pure function of the input text.
pub fn parse_bookmark(raw: &str) -> Result<BookmarkRecord, ExtractError> {
    let trimmed = raw.trim();

    let value: Value = serde_json::from_str(trimmed).map_err(|e| ExtractError::Parse {
        detail: e.to_string(),
        raw: raw.to_string(),
    })?;

    let object = value.as_object().ok_or_else(|| ExtractError::Parse {
        detail: "top-level value is not an object".to_string(),
        raw: raw.to_string(),
    })?;

    let title = required_string(object, "title", raw)?;
    let url = required_string(object, "url", raw)?;

    let description = object
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    let tags = object
        .get("tags")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(BookmarkRecord {
        title,
        url,
        description,
        tags,
    })
}

/// Fetch a required string field, treating a blank value as absent.
fn required_string(
    object: &serde_json::Map<String, Value>,
    field: &'static str,
    raw: &str,
) -> Result<String, ExtractError> {
    match object.get(field).and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        _ => Err(ExtractError::Schema {
            field,
            raw: raw.to_string(),
        }),
    }
}
