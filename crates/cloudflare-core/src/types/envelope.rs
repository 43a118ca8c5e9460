use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de::lenient_string;

/// Discriminator value the API uses to signal a failed call
pub const RESULT_ERROR: &str = "error";

/// Discriminator value the API uses to signal a successful call
pub const RESULT_SUCCESS: &str = "success";

/// Generic wrapper returned by every remote call.
///
/// The payload is kept as a raw [`Value`] so the envelope can be inspected
/// before committing to an operation-specific shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Envelope {
    /// Result discriminator (`"success"` or `"error"`)
    #[serde(default, deserialize_with = "lenient_string")]
    pub result: String,

    /// Human-readable message, usually only present on failure
    #[serde(default, rename = "msg", deserialize_with = "lenient_string")]
    pub message: String,

    /// Machine error code, empty on success
    #[serde(default, rename = "err_code", deserialize_with = "lenient_string")]
    pub error_code: String,

    /// Operation-specific payload
    pub response: Option<Value>,
}

impl Envelope {
    /// Returns true if the envelope reports failure.
    ///
    /// A non-empty error code counts as failure even when the discriminator
    /// says otherwise.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.result == RESULT_ERROR || !self.error_code.is_empty()
    }

    /// Returns the error code, if one was sent
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        (!self.error_code.is_empty()).then_some(self.error_code.as_str())
    }

    /// Walk `path` through the payload.
    ///
    /// Returns `Ok(None)` if the payload is absent or null, or if a segment
    /// is missing or null. Reaching a non-object before the end of the path
    /// is a decode error.
    ///
    /// # Errors
    ///
    /// Returns an error if a segment of `path` meets a string, number,
    /// boolean or array.
    pub fn payload_at(&self, path: &[&str]) -> Result<Option<&Value>, serde_json::Error> {
        let Some(mut node) = self.response.as_ref() else {
            return Ok(None);
        };
        for segment in path {
            if node.is_null() {
                return Ok(None);
            }
            let Some(object) = node.as_object() else {
                return Err(serde_json::Error::custom(format!(
                    "expected object containing `{segment}`, found {}",
                    kind(node)
                )));
            };
            match object.get(*segment) {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }
        Ok((!node.is_null()).then_some(node))
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
