//! Synchronous API client core for the Printful REST API.
//!
//! # Overview
//! Builds `HttpRequest` values and normalizes `HttpResponse` values without
//! touching the network (host-does-IO pattern). The `printful` crate drives
//! these over an async transport; tests drive them over anything.
//!
//! # Design
//! - `PrintfulClient` is stateless: a base URL and an optional bearer token.
//! - Endpoints are rows in the static `routes` table, not methods; each row
//!   says how to build the path and how to rename the envelope's `result`.
//! - `envelope::normalize` is the single place where the `{code, result,
//!   error, paging}` envelope becomes the caller-facing shape.

pub mod client;
pub mod envelope;
pub mod error;
pub mod http;
pub mod query;
pub mod routes;
pub mod types;

pub use client::{Call, PrintfulClient, DEFAULT_BASE_URL};
pub use envelope::{Envelope, Normalized};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use query::Query;
pub use routes::Route;
pub use types::{Paging, ResourceId};
