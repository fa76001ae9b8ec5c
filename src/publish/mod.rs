//! Pinboard publish adapter.
//!
//! Translates a validated `BookmarkRecord` into Pinboard's `posts/add`
//! call. Pinboard's field names collide with ours in a way that must be
//! preserved exactly: the service calls the title "description" and the
//! description "extended". Swapping those silently would file every
//! bookmark under the wrong field, so the mapping lives in one pure
//! function with its own tests.

use crate::bookmark::BookmarkRecord;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Flags that shape the saved bookmark, independent of extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublishOptions {
    /// Save the bookmark as private instead of public.
    pub private: bool,
    /// Mark the bookmark "to read".
    pub toread: bool,
}

/// How publishing can fail.
///
/// `Rejected` means Pinboard processed the request and said no (its
/// `result_code` was not `"done"`); `Transport` means the call itself
/// failed. Callers need to tell these apart: a rejection is final, a
/// transport failure may be worth retrying by hand.
#[derive(Error, Debug)]
pub enum PublishError {
    /// Pinboard answered with a non-"done" result code.
    #[error("{0}")]
    Rejected(String),

    /// The HTTP call failed or the response was unreadable.
    #[error("Pinboard call failed: {0}")]
    Transport(String),
}

/// The interesting part of a Pinboard v1 API response.
#[derive(Debug, Deserialize)]
struct AddResponse {
    result_code: String,
}

/// Client for the Pinboard v1 API.
pub struct PinboardClient {
    client: reqwest::blocking::Client,
    auth_token: String,
    base_url: String,
}

impl PinboardClient {
    /// Create a client for the given API token (`username:hexstring`).
    pub fn new(auth_token: &str, base_url: &str) -> Result<Self, PublishError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| PublishError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            auth_token: auth_token.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Save a bookmark via `posts/add`.
    ///
    /// Only ever called with a fully validated record; a failed extraction
    /// never reaches this point.
    pub fn add(
        &self,
        record: &BookmarkRecord,
        options: &PublishOptions,
    ) -> Result<(), PublishError> {
        let params = add_params(record, options, &self.auth_token);

        let response = self
            .client
            .get(format!("{}/posts/add", self.base_url))
            .query(&params)
            .send()
            .map_err(|e| PublishError::Transport(format!("request to Pinboard failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PublishError::Transport(format!(
                "Pinboard returned {}",
                status
            )));
        }

        let body: AddResponse = response
            .json()
            .map_err(|e| PublishError::Transport(format!("unreadable Pinboard response: {}", e)))?;

        if body.result_code == "done" {
            Ok(())
        } else {
            Err(PublishError::Rejected(body.result_code))
        }
    }
}

/// Build the `posts/add` query parameters for a record.
///
/// This is where our names become Pinboard's names: `title` maps to the
/// service's `description` parameter and `description` to `extended`.
fn add_params(
    record: &BookmarkRecord,
    options: &PublishOptions,
    auth_token: &str,
) -> Vec<(&'static str, String)> {
    vec![
        ("url", record.url.clone()),
        ("description", record.title.clone()),
        ("extended", record.description.clone()),
        ("tags", record.tags_joined()),
        ("shared", yes_no(!options.private)),
        ("toread", yes_no(options.toread)),
        ("auth_token", auth_token.to_string()),
        ("format", "json".to_string()),
    ]
}

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> BookmarkRecord {
        BookmarkRecord {
            title: "T".to_string(),
            url: "http://x".to_string(),
            description: "D".to_string(),
            tags: vec!["a-b".to_string(), "c".to_string()],
        }
    }

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> &'a str {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or_else(|| panic!("missing parameter {}", key))
    }

    #[test]
    fn title_and_description_are_name_swapped() {
        // Pinboard calls the title "description" and the description
        // "extended". This is the mapping the whole adapter exists for.
        let params = add_params(&record(), &PublishOptions::default(), "user:token");
        assert_eq!(param(&params, "description"), "T");
        assert_eq!(param(&params, "extended"), "D");
        assert_eq!(param(&params, "url"), "http://x");
    }

    #[test]
    fn tags_are_space_separated() {
        let params = add_params(&record(), &PublishOptions::default(), "user:token");
        assert_eq!(param(&params, "tags"), "a-b c");
    }

    #[test]
    fn default_options_share_publicly_and_skip_toread() {
        let params = add_params(&record(), &PublishOptions::default(), "user:token");
        assert_eq!(param(&params, "shared"), "yes");
        assert_eq!(param(&params, "toread"), "no");
    }

    #[test]
    fn private_and_toread_flags_invert_the_defaults() {
        let options = PublishOptions {
            private: true,
            toread: true,
        };
        let params = add_params(&record(), &options, "user:token");
        assert_eq!(param(&params, "shared"), "no");
        assert_eq!(param(&params, "toread"), "yes");
    }

    #[test]
    fn auth_token_and_format_ride_along() {
        let params = add_params(&record(), &PublishOptions::default(), "user:token");
        assert_eq!(param(&params, "auth_token"), "user:token");
        assert_eq!(param(&params, "format"), "json");
    }

    #[test]
    fn done_result_code_deserializes() {
        let body: AddResponse = serde_json::from_str(r#"{"result_code":"done"}"#).unwrap();
        assert_eq!(body.result_code, "done");
    }
}
