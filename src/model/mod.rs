//! The model capability consumed by extraction.
//!
//! The backend is deliberately a narrow seam: one call that takes the two
//! instruction blocks and returns free-form text. Everything pinpost knows
//! about the model service lives behind it, so tests inject canned replies
//! and the extraction pipeline never touches the network.

mod anthropic;

pub use anthropic::AnthropicBackend;

use thiserror::Error;

/// A model call failed (network, auth, quota, malformed service response).
///
/// Not distinguished further: the caller treats any backend failure as an
/// external-call error and does not retry.
#[derive(Error, Debug, Clone)]
#[error("model call failed: {0}")]
pub struct ModelError(pub String);

/// An external text-generation capability.
pub trait ModelBackend {
    /// Send the system and user instruction blocks, returning the raw
    /// response text. Blocking.
    fn generate(
        &self,
        system_instruction: &str,
        user_instruction: &str,
    ) -> Result<String, ModelError>;
}
