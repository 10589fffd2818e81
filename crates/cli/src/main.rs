//! Grid targeting demo binary.
//!
//! Prints every configured shape preset as ASCII, then replays a scripted
//! sequence of pointer events against a pick session and prints the result.
//! See [`config::CliConfig::from_env`] for the environment variables it reads.
mod config;
mod demo;
mod render;
mod script;

use anyhow::Result;
use config::CliConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = CliConfig::from_env();
    tracing::debug!(?config, "configuration loaded");

    demo::run(&config)
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
