use http::StatusCode;

/// The result of checking one login attempt. Every request ends up as
/// exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The body was absent, empty, or not a JSON object.
    NoBody,

    /// `email` or `password` was absent or falsy.
    MissingFields,

    /// Both fields were present but did not match the reference pair.
    InvalidCredentials,

    /// Both fields matched the reference pair exactly.
    Success,
}

impl Outcome {
    /// The text sent back to the client. For `Success` this goes under
    /// `message`; everything else goes under `error`.
    pub fn message(self) -> &'static str {
        match self {
            Self::NoBody => "No data provided",
            Self::MissingFields => "Missing fields",
            Self::InvalidCredentials => "Invalid credentials",
            Self::Success => "Login successful",
        }
    }

    /// The HTTP status that goes with this outcome.
    pub fn status(self) -> StatusCode {
        match self {
            Self::NoBody | Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Success => StatusCode::OK,
        }
    }

    /// Did the attempt succeed?
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn only_success_is_ok() {
        for outcome in [
            Outcome::NoBody,
            Outcome::MissingFields,
            Outcome::InvalidCredentials,
        ] {
            assert!(!outcome.is_success());
            assert!(outcome.status().is_client_error());
        }

        assert!(Outcome::Success.is_success());
        assert_eq!(Outcome::Success.status(), StatusCode::OK);
    }

    #[test]
    fn invalid_credentials_is_unauthorized() {
        assert_eq!(
            Outcome::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
