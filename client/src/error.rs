//! Errors surfaced by the async client.
//!
//! # Design
//! Two tiers. Failures the remote service reports in its envelope
//! (`code >= 400`) are not errors: they come back as a normal result whose
//! `error` field is populated. Everything that prevents a result from
//! existing at all (connection refused, timeout, a body that is not JSON)
//! is returned as `Err(Error)` and never folded into the result shape.

use printful_core::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP round-trip itself failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request could not be built or the response could not be read.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The bearer token contains bytes that are not valid in a header.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Configuration could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),
}
