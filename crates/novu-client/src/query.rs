//! Query string encoding.
//!
//! Scalars are rendered as text. Structured values are serialized to compact
//! JSON and base64-encoded (standard alphabet, padded) before being
//! percent-encoded into the query, which is how the server expects filter
//! objects such as a notification feed's `payload`.
//!
//! Which fields are structured is declared by the option type, never
//! inferred from the value:
//!
//! ```
//! use novu_client::query::QueryOptions;
//! use serde_json::json;
//!
//! let query = QueryOptions::new()
//!     .scalar("seen", false)
//!     .structured("payload", &json!({ "name": "test" }))
//!     .unwrap();
//!
//! assert_eq!(query.encode(), "payload=eyJuYW1lIjoidGVzdCJ9&seen=false");
//! ```

use std::collections::BTreeMap;

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::Serialize;
use url::form_urlencoded;

use crate::error::Result;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// Emitted as-is.
    Str(String),
    /// Emitted in base 10.
    Int(i64),
    /// Emitted as `true` / `false`.
    Bool(bool),
    /// Omitted from the query string.
    Null,
    /// Emitted as base64 of the compact JSON.
    Structured(serde_json::Value),
}

impl QueryValue {
    /// Render the value, or `None` when it should be omitted.
    fn render(&self) -> Option<String> {
        match self {
            QueryValue::Str(s) => Some(s.clone()),
            QueryValue::Int(n) => Some(n.to_string()),
            QueryValue::Bool(b) => Some(b.to_string()),
            QueryValue::Null => None,
            QueryValue::Structured(value) => Some(STANDARD.encode(value.to_string())),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Str(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(QueryValue::Null, Into::into)
    }
}

/// Query parameters keyed by name.
///
/// Keys are kept sorted so the encoded string is reproducible regardless of
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    params: BTreeMap<String, QueryValue>,
}

impl QueryOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter to an already-built value.
    pub fn insert(&mut self, key: impl Into<String>, value: QueryValue) {
        self.params.insert(key.into(), value);
    }

    /// Add a scalar parameter. `None` is omitted at encode time.
    pub fn scalar(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value.into());
        self
    }

    /// Add a structured parameter, encoded as base64 JSON.
    pub fn structured<T: Serialize + ?Sized>(
        mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<Self> {
        let value = serde_json::to_value(value)?;
        let value = if value.is_null() {
            QueryValue::Null
        } else {
            QueryValue::Structured(value)
        };
        self.insert(key, value);
        Ok(self)
    }

    /// Add a structured parameter when present.
    pub fn structured_opt<T: Serialize>(
        self,
        key: impl Into<String>,
        value: Option<&T>,
    ) -> Result<Self> {
        match value {
            Some(value) => self.structured(key, value),
            None => Ok(self),
        }
    }

    /// Get a parameter by name.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.get(key)
    }

    /// True when no parameter would be emitted.
    pub fn is_empty(&self) -> bool {
        self.params.values().all(|v| matches!(v, QueryValue::Null))
    }

    /// Encode into a query string without a leading `?`.
    ///
    /// Empty options encode to an empty string.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.params {
            if let Some(rendered) = value.render() {
                serializer.append_pair(key, &rendered);
            }
        }
        serializer.finish()
    }
}

/// Types that describe themselves as query parameters.
///
/// Implementations declare, per field, whether the field is a scalar or a
/// structured value.
pub trait ToQuery {
    /// Build the query parameters for this value.
    fn to_query(&self) -> Result<QueryOptions>;
}

impl ToQuery for QueryOptions {
    fn to_query(&self) -> Result<QueryOptions> {
        Ok(self.clone())
    }
}

/// Decode a structured query value back into JSON.
///
/// Accepts the value as it appears after percent-decoding. Returns `None`
/// when the text is not base64 or does not hold JSON.
pub fn decode_structured(encoded: &str) -> Option<serde_json::Value> {
    let bytes = STANDARD.decode(encoded).ok()?;
    serde_json::from_slice(&bytes).ok()
}
