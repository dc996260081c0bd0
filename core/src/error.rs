//! Error types for the Printful client core.
//!
//! # Design
//! Only faults that prevent a normalized result from existing live here:
//! a body that cannot be serialized, a response that is not JSON, or a
//! request that cannot be built. Application-level failures reported by the
//! remote service (`code >= 400`) are not errors at this layer; they are
//! carried in `Normalized::error`.

use thiserror::Error;

/// Errors returned by `PrintfulClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body was not a JSON envelope, or a normalized result
    /// did not fit the requested type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request could not be assembled, e.g. a path placeholder was left
    /// unfilled.
    #[error("invalid request for {route}: {reason}")]
    InvalidRequest { route: &'static str, reason: String },
}
