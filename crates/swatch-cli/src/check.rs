//! The color audit: load config, fetch the catalog, classify, report.
//!
//! Every failure ends the run. `main` prints the [`CheckError`] and exits
//! normally, so the exit status does not distinguish failure kinds.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use swatch_core::{ClassifyError, ConfigError, StorefrontConfig};
use swatch_storefront::{StorefrontClient, StorefrontError};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Error)]
pub(crate) enum CheckError {
    #[error("Error: Missing Shopify API credentials ({0} is not set). Please check your .env file.")]
    MissingCredentials(String),

    #[error("Error making API request: {0}")]
    Transport(#[from] StorefrontError),

    #[error("Error: {0}")]
    MalformedProduct(#[from] ClassifyError),

    #[error("Unexpected error: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl From<ConfigError> for CheckError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::MissingEnvVar(var) => Self::MissingCredentials(var),
            other @ (ConfigError::InvalidEnvVar { .. } | ConfigError::EnvFile { .. }) => {
                Self::Unexpected(other.into())
            }
        }
    }
}

/// Runs the full audit, writing the report to stdout.
///
/// # Errors
///
/// See [`check`].
pub(crate) async fn run(env_file: Option<&Path>, format: OutputFormat) -> Result<(), CheckError> {
    let config = match env_file {
        Some(path) => swatch_core::load_storefront_config_from_file(path),
        None => swatch_core::load_storefront_config(),
    };
    check(config, None, format, &mut std::io::stdout()).await
}

/// Validates the loaded config, then fetches and reports.
///
/// `base_url` overrides the store's own origin (a mock server in tests).
///
/// # Errors
///
/// Returns [`CheckError::MissingCredentials`] before any client is built if
/// either credential is absent; otherwise the first error from fetching,
/// classifying, or writing the report.
pub(crate) async fn check<W: Write>(
    config: Result<StorefrontConfig, ConfigError>,
    base_url: Option<&str>,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CheckError> {
    let config = config?;
    init_tracing(&config)?;
    tracing::debug!(?config, "loaded storefront config");

    let client = match base_url {
        Some(base_url) => StorefrontClient::with_base_url(&config, base_url)?,
        None => StorefrontClient::new(&config)?,
    };
    check_catalog(&client, format, out).await
}

/// Fetches, classifies, and writes the report for one storefront.
///
/// # Errors
///
/// Returns the first error from fetching, classifying, or writing.
pub(crate) async fn check_catalog<W: Write>(
    client: &StorefrontClient,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CheckError> {
    let products = client.fetch_products().await?;
    let classification = swatch_core::classify(&products)?;
    tracing::info!(
        total = products.len(),
        with_colors = classification.with_colors.len(),
        without_colors = classification.without_colors.len(),
        "classified catalog"
    );

    let written = match format {
        OutputFormat::Text => report::write_text(out, products.len(), &classification),
        OutputFormat::Json => report::write_json(out, products.len(), &classification),
    };
    written.context("failed to write report")?;

    Ok(())
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over the configured
/// level. A second call is a no-op.
fn init_tracing(config: &StorefrontConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .with_context(|| format!("invalid log level \"{}\"", config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
    Ok(())
}

#[cfg(test)]
#[path = "check_test.rs"]
mod tests;
