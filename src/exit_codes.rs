//! Exit code constants for the pinpost CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing configuration)
//! - 2: Extraction failure (model output could not be parsed or validated)
//! - 3: External call failure (model or Pinboard unreachable / errored)
//! - 4: Publish rejected (Pinboard answered but refused the bookmark)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or missing configuration.
pub const USER_ERROR: i32 = 1;

/// Extraction failure: the model response was not a usable bookmark.
pub const EXTRACTION_FAILURE: i32 = 2;

/// External call failure: the model or Pinboard service itself failed.
pub const EXTERNAL_FAILURE: i32 = 3;

/// Publish rejected: Pinboard answered but refused to save the bookmark.
pub const PUBLISH_REJECTED: i32 = 4;
