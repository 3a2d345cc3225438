use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use login_core::{login::ErrorResp, Outcome};

/// A rejected request, rendered as `{"error": message}`.
#[derive(Debug, PartialEq)]
pub struct Error {
    status: StatusCode,
    message: String,
}

impl Error {
    /// Construct an error with a specific status code
    pub fn custom_with_status(message: &str, status: StatusCode) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    /// Take the status code and message back out, for assertions.
    #[cfg(test)]
    pub fn unwrap_custom(self) -> (StatusCode, String) {
        (self.status, self.message)
    }
}

impl From<Outcome> for Error {
    fn from(outcome: Outcome) -> Self {
        Self::custom_with_status(outcome.message(), outcome.status())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = Json(ErrorResp {
            error: self.message,
        });

        (self.status, body).into_response()
    }
}
