//! Hirelink - client library for the Hirelink recruitment portal.
//!
//! `services` holds the HTTP client, the typed endpoints and the session
//! store; `pages` holds the page controllers built on top of them.

pub mod error;
pub mod models;
pub mod pages;
pub mod services;

use error::AppError;
use pages::PageContext;
use services::{ApiClient, Settings};
use tracing_subscriber::EnvFilter;

/// Install the log subscriber. `RUST_LOG` overrides the default filter.
///
/// Library code logs through the `log` facade; the subscriber picks those
/// records up as well. Calling this twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hirelink=info,hirelink_lib=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Build the page context (client plus session) for the given settings.
pub fn connect(settings: &Settings) -> Result<PageContext, AppError> {
    let client = ApiClient::new(settings.client_config())?;
    log::info!(
        "Using API {} with {:?} session store",
        client.base_url(),
        settings.session_backend
    );
    Ok(PageContext::new(client, settings.session_manager()))
}
