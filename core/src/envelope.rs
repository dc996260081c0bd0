//! Envelope parsing and normalization.
//!
//! Every Printful response is wrapped as
//! `{"code": <status>, "result": ..., "error": {...}?, "paging": {...}?}`.
//! `normalize` turns that envelope into the caller-facing shape defined by a
//! `Route`: one entry per payload field, an optional paging block, and an
//! `error` object that is `{}` exactly when the call succeeded.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::routes::{Route, Source};
use crate::types::Paging;

/// Status codes at or above this value are application failures.
pub const FAILURE_THRESHOLD: u16 = 400;

/// Raw envelope as sent by the remote service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub paging: Option<Value>,
}

impl Envelope {
    pub fn from_json(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

/// Caller-facing result of one call.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub code: u16,
    pub fields: Map<String, Value>,
    pub paging: Option<Value>,
    pub error: Value,
}

impl Normalized {
    pub fn is_error(&self) -> bool {
        self.code >= FAILURE_THRESHOLD
    }

    /// Payload field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The `{<fields>, paging?, error}` object handed to callers.
    pub fn to_value(&self) -> Value {
        let mut out = self.fields.clone();
        if let Some(paging) = &self.paging {
            out.insert("paging".to_string(), paging.clone());
        }
        out.insert("error".to_string(), self.error.clone());
        Value::Object(out)
    }

    /// Deserialize the caller-facing object into a typed result.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        serde_json::from_value(self.to_value()).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

/// Normalize a parsed envelope for `route`.
///
/// `status` is the HTTP status, used only when the envelope carries no
/// `code`. `requested` is the caller's paging, echoed back when the envelope
/// has none.
pub fn normalize(route: &Route, status: u16, envelope: Envelope, requested: Option<Paging>) -> Normalized {
    let code = envelope.code.unwrap_or(status);
    let failed = code >= FAILURE_THRESHOLD;

    let mut fields = Map::new();
    for field in route.fields {
        let value = if failed {
            field.empty.value()
        } else {
            let value = match field.source {
                Source::Result => envelope.result.clone(),
                Source::Member(key) => envelope.result.get(key).cloned().unwrap_or(Value::Null),
            };
            field.empty.fit(value)
        };
        fields.insert(field.name.to_string(), value);
    }

    let paging = if route.paged {
        match &envelope.paging {
            Some(p) if !failed => Some(p.clone()),
            _ => requested.map(requested_paging),
        }
    } else {
        None
    };

    let error = if failed {
        failure_error(code, &envelope)
    } else {
        Value::Object(Map::new())
    };

    Normalized {
        code,
        fields,
        paging,
        error,
    }
}

fn requested_paging(paging: Paging) -> Value {
    let mut map = Map::new();
    map.insert("offset".to_string(), Value::from(paging.offset));
    map.insert("limit".to_string(), Value::from(paging.limit));
    Value::Object(map)
}

/// The envelope's error object, or a synthesized one when it is missing or
/// empty. Never returns `{}`.
fn failure_error(code: u16, envelope: &Envelope) -> Value {
    match &envelope.error {
        Some(Value::Object(obj)) if !obj.is_empty() => Value::Object(obj.clone()),
        Some(Value::String(msg)) if !msg.is_empty() => synthesized(code, msg),
        _ => {
            let message = match &envelope.result {
                Value::String(s) if !s.is_empty() => s.clone(),
                _ => format!("request failed with status {code}"),
            };
            synthesized(code, &message)
        }
    }
}

fn synthesized(code: u16, message: &str) -> Value {
    let mut map = Map::new();
    map.insert("code".to_string(), Value::from(code));
    map.insert("message".to_string(), Value::from(message));
    Value::Object(map)
}
