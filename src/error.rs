//! Error taxonomy for the service layer
//!
//! Components surface these as inline messages or error flags; nothing here
//! ever propagates to a process-level crash.

use thiserror::Error;

/// Errors from the generative-content adapter and its retry helper
#[derive(Debug, Error)]
pub enum GenAiError {
    /// Network failure or non-success HTTP status, after exhausting retries
    #[error("request failed after {attempts} attempts: {last_error}")]
    RequestFailed { attempts: u32, last_error: String },

    /// Response JSON was missing the expected field
    #[error("response missing expected field `{0}`")]
    ParseFailed(&'static str),

    /// The cancellation token was triggered while the request was in flight
    #[error("request cancelled")]
    Cancelled,

    /// The decoded asset could not be written to the cache directory
    #[error("could not store generated asset: {0}")]
    StoreFailed(String),
}

/// Errors from the optional voice features
#[derive(Debug, Error)]
pub enum SpeechError {
    /// The host has no usable speech engine for the requested direction
    #[error("capability unavailable: {0}")]
    CapabilityUnavailable(String),

    /// An engine was found but failed to launch
    #[error("speech engine failed: {0}")]
    EngineFailed(String),
}
