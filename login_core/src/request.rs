use serde_json::{Map, Value};
use thiserror::Error;

/// Reasons a request body could not be turned into a `LoginRequest`. All of
/// these mean the client effectively sent nothing we can use.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No bytes at all, or a JSON document that is falsy (`null`, `{}`,
    /// `[]`, `""`, `0`, `false`.)
    #[error("request body is empty")]
    Empty,

    /// The bytes were not JSON.
    #[error("request body is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Valid JSON, but not an object we could look fields up in.
    #[error("request body is not a JSON object")]
    NotAnObject,
}

/// A single login attempt. Fields keep their raw JSON value: a falsy value
/// counts as missing, and a non-string value can never match.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginRequest {
    /// The submitted email, if any.
    pub email: Option<Value>,

    /// The submitted password, if any.
    pub password: Option<Value>,
}

impl LoginRequest {
    /// Build a request from two plain strings.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(Value::String(email.into())),
            password: Some(Value::String(password.into())),
        }
    }

    /// Decode a raw request body. This never panics; anything that isn't a
    /// non-empty JSON object is an error.
    pub fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(DecodeError::Empty);
        }

        match serde_json::from_slice::<Value>(body)? {
            Value::Object(map) if !map.is_empty() => Ok(Self::from(map)),
            value if !is_truthy(&value) => Err(DecodeError::Empty),
            _ => Err(DecodeError::NotAnObject),
        }
    }

    /// The email, unless it is absent or falsy.
    pub fn present_email(&self) -> Option<&Value> {
        self.email.as_ref().filter(|value| is_truthy(value))
    }

    /// The password, unless it is absent or falsy.
    pub fn present_password(&self) -> Option<&Value> {
        self.password.as_ref().filter(|value| is_truthy(value))
    }
}

impl From<Map<String, Value>> for LoginRequest {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            email: map.remove("email"),
            password: map.remove("password"),
        }
    }
}

/// JSON truthiness: `null`, `false`, zero, and empty strings, arrays and
/// objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
