//! Checking login attempts against a single configured credential pair.
//! Shared by the server and anything that wants to speak its wire format.

/// The reference email and password.
pub mod credentials;
pub use credentials::Credentials;

/// What a login attempt can turn into.
pub mod outcome;
pub use outcome::Outcome;

/// Decoding request bodies without failing loudly.
pub mod request;
pub use request::{DecodeError, LoginRequest};

/// Wire types for the login endpoint.
pub mod login;
