//! The bookmark record produced by extraction and consumed by publishing.

use serde::{Deserialize, Serialize};

/// A fully validated bookmark.
///
/// A `BookmarkRecord` only ever exists in a valid state: `title` and `url`
/// are non-empty, and the optional fields have been defaulted. Construction
/// happens in `extract::parse_bookmark`; the publish step never sees a
/// partially populated record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkRecord {
    /// The page's substantive content title (not the raw `<title>` tag).
    pub title: String,

    /// The bookmarked URL, echoing the input URL.
    pub url: String,

    /// A 1-2 sentence summary of the page. Empty when the model omits it.
    #[serde(default)]
    pub description: String,

    /// Lowercase, hyphenated tags. Order is preserved. Empty when omitted.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BookmarkRecord {
    /// Tags joined the way Pinboard wants them: space separated.
    pub fn tags_joined(&self) -> String {
        self.tags.join(" ")
    }
}
