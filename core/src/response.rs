//! Decoded API payloads.
//!
//! The API returns either a single record or a list of records. No schema is
//! imposed: records stay as `serde_json` values and callers pick out the
//! fields they need.

use serde::Serialize;
use serde_json::{Map, Value};

/// Top-level JSON body of a successful response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DecodedResponse {
    /// A single record, e.g. one show's summary.
    Object(Map<String, Value>),
    /// An ordered list, e.g. trending shows. Order is the server's.
    Array(Vec<Value>),
    /// Any other valid JSON document (string, number, bool, null).
    Scalar(Value),
}

impl DecodedResponse {
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            DecodedResponse::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            DecodedResponse::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Field lookup on an object payload. `None` for arrays and scalars.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Number of fields (object) or items (array). Scalars count as one.
    pub fn len(&self) -> usize {
        match self {
            DecodedResponse::Object(map) => map.len(),
            DecodedResponse::Array(items) => items.len(),
            DecodedResponse::Scalar(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_value(self) -> Value {
        match self {
            DecodedResponse::Object(map) => Value::Object(map),
            DecodedResponse::Array(items) => Value::Array(items),
            DecodedResponse::Scalar(value) => value,
        }
    }
}

impl From<Value> for DecodedResponse {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => DecodedResponse::Object(map),
            Value::Array(items) => DecodedResponse::Array(items),
            other => DecodedResponse::Scalar(other),
        }
    }
}
