//! Response type and builders for the contact endpoint.
//!
//! Handlers produce a [`ContactResponse`]; the Lambda adapter turns it into
//! an API Gateway proxy response with [`ContactResponse::into_value`].

use serde_json::{Value, json};
use std::collections::BTreeMap;

pub const MISSING_FIELDS: &str = "Missing fields";
pub const EMAIL_FAILED: &str = "Email failed";
pub const INVALID_BODY: &str = "Invalid body";
pub const INVALID_REQUEST: &str = "Invalid request";
pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ContactResponse {
    fn new(status_code: u16, content_type: Option<&str>, body: String) -> Self {
        let mut headers = BTreeMap::new();
        if let Some(content_type) = content_type {
            headers.insert("Content-Type".to_string(), content_type.to_string());
        }
        Self {
            status_code,
            headers,
            body,
        }
    }

    /// Merges `extra` into the response headers.
    #[must_use]
    pub fn with_headers(mut self, extra: BTreeMap<String, String>) -> Self {
        self.headers.extend(extra);
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Parses the body back as JSON; `None` for empty or plain-text bodies.
    pub fn json_body(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        json!({
            "statusCode": self.status_code,
            "headers": self.headers,
            "body": self.body,
        })
    }
}

/// Returns a 200 OK response with `{"ok":true}`.
#[must_use]
pub fn ok() -> ContactResponse {
    ContactResponse::new(
        200,
        Some("application/json"),
        json!({ "ok": true }).to_string(),
    )
}

/// Returns a JSON error response `{"ok":false,"error":message}`.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> ContactResponse {
    ContactResponse::new(
        status_code,
        Some("application/json"),
        json!({ "ok": false, "error": message }).to_string(),
    )
}

/// Returns a 204 with no body, used for preflight requests.
#[must_use]
pub fn no_content() -> ContactResponse {
    ContactResponse::new(204, None, String::new())
}

/// Returns a 405 with a plain-text body.
#[must_use]
pub fn method_not_allowed() -> ContactResponse {
    ContactResponse::new(
        405,
        Some("text/plain; charset=utf-8"),
        METHOD_NOT_ALLOWED.to_string(),
    )
}
