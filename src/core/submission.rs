//! Contact-form submission decoding and validation.

use serde_json::{Map, Value};

use crate::errors::ContactError;

pub const HONEYPOT_FIELD: &str = "_hp";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A submission as posted by the browser. Every field is optional until
/// [`Submission::validate`] says otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    /// Whether the hidden `_hp` field carried a truthy value.
    pub honeypot_filled: bool,
}

/// A submission with all required fields present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    /// Decodes a request body according to its content type.
    ///
    /// Form-encoded bodies are decoded as such; anything else is read as
    /// JSON. An absent or blank body yields an empty submission.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::InvalidRequest`] when a JSON body does not parse.
    pub fn decode(body: Option<&str>, content_type: Option<&str>) -> Result<Self, ContactError> {
        let Some(body) = body.filter(|b| !b.trim().is_empty()) else {
            return Ok(Self::default());
        };

        if content_type.is_some_and(is_form_content_type) {
            Ok(Self::from_form(body))
        } else {
            Self::from_json(body)
        }
    }

    /// # Errors
    ///
    /// Returns [`ContactError::InvalidRequest`] when `body` is not valid JSON.
    pub fn from_json(body: &str) -> Result<Self, ContactError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| ContactError::InvalidRequest(format!("Invalid JSON body: {e}")))?;

        // Non-object payloads carry no fields, same as an empty object.
        let Value::Object(map) = value else {
            return Ok(Self::default());
        };

        Ok(Self {
            name: json_field(&map, "name"),
            email: json_field(&map, "email"),
            message: json_field(&map, "message"),
            honeypot_filled: map.get(HONEYPOT_FIELD).is_some_and(is_truthy),
        })
    }

    #[must_use]
    pub fn from_form(body: &str) -> Self {
        let mut submission = Self::default();
        for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
            let slot = match key.as_ref() {
                "name" => &mut submission.name,
                "email" => &mut submission.email,
                "message" => &mut submission.message,
                HONEYPOT_FIELD => {
                    submission.honeypot_filled |= !value.is_empty();
                    continue;
                }
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        submission
    }

    /// True when the hidden honeypot field was filled in.
    #[must_use]
    pub fn is_spam(&self) -> bool {
        self.honeypot_filled
    }

    #[must_use]
    pub fn validate(&self) -> Option<ValidSubmission> {
        Some(ValidSubmission {
            name: required(self.name.as_deref())?,
            email: required(self.email.as_deref())?,
            message: required(self.message.as_deref())?,
        })
    }
}

fn is_form_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|main| main.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

fn json_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Browser-side truthiness: empty strings, `0`, `false` and `null` are
/// falsy; every array and object is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::Bool(true) | Value::Array(_) | Value::Object(_) => true,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
    }
}

fn required(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}
