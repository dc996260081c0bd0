//! Resource-area APIs.
//!
//! Each area is a thin borrow of the shared `Executor`: methods turn typed
//! arguments into a `Call` on a row of `printful_core::routes` and return
//! the normalized result under the payload names callers expect.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod approval_sheets;
pub mod catalog;
pub mod countries;
pub mod files;
pub mod mockups;
pub mod oauth;
pub mod orders;
pub mod products;
pub mod reports;
pub mod shipping;
pub mod stores;
pub mod sync;
pub mod tax;
pub mod templates;
pub mod warehouse;
pub mod webhooks;

/// The `error` field of every result: `{}` on success, the remote service's
/// error object (usually `reason` + `message`) on failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteError(pub Map<String, Value>);

impl RemoteError {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    pub fn reason(&self) -> Option<&str> {
        self.0.get("reason").and_then(Value::as_str)
    }
}

/// The `paging` block of a list result, kept exactly as received.
///
/// On success this is the remote service's object, extra members included;
/// on failure it echoes the requested `{offset, limit}`. Accessors return
/// `None` for members that are absent or not unsigned integers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageInfo(pub Value);

impl PageInfo {
    pub fn offset(&self) -> Option<u64> {
        self.0.get("offset").and_then(Value::as_u64)
    }

    pub fn limit(&self) -> Option<u64> {
        self.0.get("limit").and_then(Value::as_u64)
    }

    pub fn total(&self) -> Option<u64> {
        self.0.get("total").and_then(Value::as_u64)
    }

    /// Member by name, for anything beyond offset, limit and total.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}
