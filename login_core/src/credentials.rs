use crate::outcome::Outcome;
use crate::request::LoginRequest;
use std::fmt;
use std::sync::Arc;

/// The email accepted when nothing else is configured.
pub const DEFAULT_EMAIL: &str = "sam.albershtein@gmail.com";

/// The password accepted when nothing else is configured.
pub const DEFAULT_PASSWORD: &str = "1234";

/// The one email/password pair that counts as a successful login. Set once
/// at startup and never changed; clones share the same strings.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: Arc<str>,
    password: Arc<str>,
}

impl Credentials {
    /// Create a reference pair.
    pub fn new(email: impl Into<Arc<str>>, password: impl Into<Arc<str>>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// The reference email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Check a login attempt. `None` means the body could not be decoded
    /// into anything usable.
    ///
    /// Comparison is exact: no trimming, no case folding, and non-string
    /// values never match.
    pub fn validate(&self, req: Option<&LoginRequest>) -> Outcome {
        let Some(req) = req else {
            return Outcome::NoBody;
        };

        let (Some(email), Some(password)) = (req.present_email(), req.present_password()) else {
            return Outcome::MissingFields;
        };

        if email.as_str() == Some(&*self.email) && password.as_str() == Some(&*self.password) {
            Outcome::Success
        } else {
            Outcome::InvalidCredentials
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_EMAIL, DEFAULT_PASSWORD)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
