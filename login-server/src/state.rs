use axum::extract::FromRef;
use login_core::Credentials;

/// Shared state needed by requests.
#[derive(Clone, Debug, FromRef)]
pub struct State {
    /// The pair every login attempt is checked against.
    credentials: Credentials,
}

impl State {
    /// Create a new state.
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}
