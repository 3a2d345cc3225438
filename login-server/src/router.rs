use crate::handlers;
use crate::state::State;
use axum::{
    extract::DefaultBodyLimit,
    routing::post,
    Router,
};
use login_core::login;
use std::time::Duration;
use tower_http::{compression, decompression, limit, timeout, trace};

/// Per-request resource limits.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// Request body size limit, in bytes
    pub body_limit: usize,

    /// How long a request may take before we give up on it
    pub request_timeout: Duration,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            body_limit: 5 * 1024 * 1024,
            request_timeout: Duration::from_secs(5),
        }
    }
}

/// Build the app: routes, state, and middleware.
pub fn router(state: State, limits: Limits) -> Router {
    Router::new()
        // ROUTES
        .route(login::PATH, post(handlers::login::handler))
        // STATE
        .with_state(state)
        // MIDDLEWARE
        .layer(trace::TraceLayer::new_for_http())
        .layer(compression::CompressionLayer::new())
        .layer(decompression::RequestDecompressionLayer::new())
        .layer(DefaultBodyLimit::disable())
        .layer(limit::RequestBodyLimitLayer::new(limits.body_limit))
        .layer(timeout::TimeoutLayer::new(limits.request_timeout))
}
