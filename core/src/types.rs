//! Shared value types: resource identifiers and pagination.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier placed into a path segment.
///
/// Printful accepts either its own numeric id or a store-defined external id
/// written as `@<external_id>`. String ids are forwarded verbatim; the client
/// never adds, strips or escapes the `@`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceId {
    Internal(u64),
    Raw(String),
}

impl ResourceId {
    /// `@`-prefixed external id.
    pub fn external(id: impl fmt::Display) -> Self {
        ResourceId::Raw(format!("@{id}"))
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Internal(id) => write!(f, "{id}"),
            ResourceId::Raw(id) => f.write_str(id),
        }
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        ResourceId::Internal(id)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        ResourceId::Raw(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        ResourceId::Raw(id)
    }
}

/// Pagination block of list endpoints.
///
/// `total` is only known when the remote service reports it; a paging value
/// echoed back from the caller's own request has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub offset: u64,
    pub limit: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl Paging {
    pub fn requested(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit,
            total: None,
        }
    }
}
