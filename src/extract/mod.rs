//! Bookmark extraction subsystem.
//!
//! This module provides:
//!
//! - **Template**: `{variable}` substitution engine for prompt text
//! - **Prompt**: the fixed system instruction and per-call user instruction
//! - **Parser**: strict decoding of model output into a `BookmarkRecord`
//! - **Extractor**: the composition of the three around a model backend
//!
//! The model backend is injected as a trait object so extraction is testable
//! with canned replies, without a network dependency.

mod parser;
mod prompt;
mod template;

pub use parser::{ExtractError, parse_bookmark};
pub use prompt::{Prompt, SYSTEM_INSTRUCTION, bookmark_prompt};
pub use template::{TemplateError, render_template};

use crate::bookmark::BookmarkRecord;
use crate::error::{PinpostError, Result};
use crate::model::ModelBackend;

/// Runs one URL through prompt -> model -> parser.
pub struct Extractor {
    backend: Box<dyn ModelBackend>,
}

impl Extractor {
    /// Create an extractor over the given model backend.
    pub fn new(backend: Box<dyn ModelBackend>) -> Self {
        Self { backend }
    }

    /// Extract a validated bookmark for `url`.
    ///
    /// Fails with an external-call error when the backend fails, or with an
    /// extraction error when the reply cannot be parsed or validated. A
    /// partially populated record is never returned.
    pub fn extract(&self, url: &str) -> Result<BookmarkRecord> {
        let prompt = bookmark_prompt(url)
            .map_err(|e| PinpostError::User(format!("failed to render prompt: {}", e)))?;

        let raw = self.backend.generate(prompt.system, &prompt.user)?;

        Ok(parse_bookmark(&raw)?)
    }
}
