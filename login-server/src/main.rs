//! A login server that checks attempts against one configured credential
//! pair.

use clap::Parser;
use login_core::{
    credentials::{DEFAULT_EMAIL, DEFAULT_PASSWORD},
    Credentials,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod handlers;
mod router;
mod state;

#[derive(Debug, Parser)]
#[clap(version)]
struct Config {
    #[clap(long, env, default_value = "0.0.0.0:5000")]
    address: String,

    /// Request body size limit, in bytes
    #[clap(long, env, default_value = "5242880")]
    body_limit: usize,

    /// Request timeout, in seconds
    #[clap(long, env, default_value = "5", value_parser = duration_parser)]
    request_timeout: Duration,

    /// The only email that can log in
    #[clap(long, env, default_value = DEFAULT_EMAIL)]
    reference_email: String,

    /// The password that goes with the reference email
    #[clap(
        long,
        env,
        default_value = DEFAULT_PASSWORD,
        hide_default_value = true,
        hide_env_values = true
    )]
    reference_password: String,
}

impl Config {
    fn credentials(&self) -> Credentials {
        Credentials::new(self.reference_email.as_str(), self.reference_password.as_str())
    }

    fn limits(&self) -> router::Limits {
        router::Limits {
            body_limit: self.body_limit,
            request_timeout: self.request_timeout,
        }
    }
}

fn duration_parser(s: &str) -> Result<Duration, std::num::ParseIntError> {
    s.parse().map(Duration::from_secs)
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let options = Config::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let credentials = options.credentials();
    tracing::info!(email = credentials.email(), "accepting logins");

    let app = router::router(state::State::new(credentials), options.limits());

    let listener = TcpListener::bind(&options.address).await?;
    tracing::info!(address = ?listener.local_addr(), "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
