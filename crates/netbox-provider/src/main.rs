//! NetBox provider schema dump
//!
//! Prints the provider, resource and data source schemas as JSON. When
//! `NETBOX_ENDPOINT_ADDR` is set the configuration is resolved first, which
//! probes the NetBox API with the token from `NETBOX_APP_ID`.

use anyhow::Context;
use netbox_provider::config::{Config, ENDPOINT_ENV};
use netbox_provider::provider;
use std::env;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if env::var_os(ENDPOINT_ENV).is_some() {
        let config = Config::from_env();
        info!("Validating NetBox endpoint {}", config.endpoint);
        config
            .client()
            .await
            .with_context(|| format!("failed to configure NetBox provider for {}", config.endpoint))?;
    } else {
        warn!("{} not set, skipping connectivity check", ENDPOINT_ENV);
    }

    let schemas = serde_json::to_string_pretty(&provider::schemas()).context("failed to render schemas")?;
    println!("{}", schemas);
    Ok(())
}
