//! Decoding of API Gateway / function URL proxy events.

use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::errors::ContactError;

/// The parts of an inbound HTTP request the contact handler looks at.
#[derive(Debug, Clone, Default)]
pub struct ContactRequest {
    pub method: String,
    /// Header names are stored lowercased.
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl ContactRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn origin(&self) -> Option<&str> {
        self.header("Origin")
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
    }

    /// Builds a request from a payload v1 (`httpMethod`) or v2 / function URL
    /// (`requestContext.http.method`) proxy event.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::InvalidRequest`] when the event has no method
    /// or its base64 body cannot be decoded.
    pub fn from_event(payload: &Value) -> Result<Self, ContactError> {
        let method = v_str(payload, &["requestContext", "http", "method"])
            .or_else(|| v_str(payload, &["httpMethod"]))
            .ok_or_else(|| ContactError::InvalidRequest("Missing HTTP method".to_string()))?;

        let headers: BTreeMap<String, String> = payload
            .get("headers")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(k, v)| Some((k.to_ascii_lowercase(), v.as_str()?.to_string())))
                    .collect()
            })
            .unwrap_or_default();

        let is_base64 = payload
            .get("isBase64Encoded")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let body = match payload.get("body").and_then(Value::as_str) {
            Some(raw) if is_base64 => Some(decode_base64_body(raw)?),
            Some(raw) => Some(raw.to_string()),
            None => None,
        };

        Ok(Self {
            method: method.to_string(),
            headers,
            body,
        })
    }
}

fn decode_base64_body(raw: &str) -> anyhow::Result<String> {
    let bytes = STANDARD
        .decode(raw.trim())
        .context("Body is not valid base64")?;
    String::from_utf8(bytes).context("Body is not valid UTF-8")
}

/// Walks `path` through nested objects and returns the string at the end.
fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    path.iter()
        .try_fold(root, |cur, key| cur.get(*key))
        .and_then(Value::as_str)
}

/// Case-insensitive header lookup on a raw event `headers` object.
pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}
