use serde::{Deserialize, Serialize};

/// Result of a successful login.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resp {
    /// Always "Login successful".
    pub message: String,
}

/// Body returned for every rejected login.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResp {
    /// Human-readable reason for the rejection.
    pub error: String,
}

/// Where the login endpoint lives.
pub const PATH: &str = "/login";
