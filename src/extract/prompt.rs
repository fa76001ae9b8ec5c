//! Prompt construction for bookmark extraction.
//!
//! The system instruction is constant across calls and carries the whole
//! output contract: which four fields to produce and the hard "JSON only, no
//! code fences" constraint. The per-call user instruction only interpolates
//! the target URL. Keeping the contract in the stable half reduces
//! output-format drift between calls.

use crate::extract::template::{TemplateError, render_template, vars};

/// The fixed instruction that defines the extraction contract.
pub const SYSTEM_INSTRUCTION: &str = "\
You are a bookmark extraction assistant. Fetch the web page content and extract bookmark data.
Extract these four fields:
- title: The main title/headline of the page (not the HTML title tag, but the actual content title)
- url: The original URL provided
- description: A concise 1-2 sentence summary of what the page is about
- tags: An array of 3-8 relevant lowercase tags (use hyphens for multi-word tags)
CRITICAL: Return ONLY the JSON object with no additional text, explanations, code fences, or markdown formatting. Your entire response must be valid JSON that can be parsed directly.";

/// Per-call instruction template. `{url}` is the only placeholder.
const USER_TEMPLATE: &str = "\
Please fetch and analyze this web page to create a Pinboard bookmark entry:
URL: {url}
First fetch the web page content, then extract the bookmark data as JSON. DO NOT include a code fence.";

/// The two text blocks sent to the model for one extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Constant system instruction.
    pub system: &'static str,
    /// User instruction with the URL interpolated.
    pub user: String,
}

/// Build the prompt pair for a URL.
///
/// Pure function of the URL; no state is retained between calls. The URL is
/// not validated here (any non-empty string is handed to the model as-is).
pub fn bookmark_prompt(url: &str) -> Result<Prompt, TemplateError> {
    let user = render_template(USER_TEMPLATE, &vars([("url", url)]))?;
    Ok(Prompt {
        system: SYSTEM_INSTRUCTION,
        user,
    })
}
