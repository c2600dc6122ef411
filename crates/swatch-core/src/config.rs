use std::path::Path;

use thiserror::Error;

use crate::app_config::StorefrontConfig;

pub const STORE_DOMAIN_VAR: &str = "SHOPIFY_STORE_DOMAIN";
pub const STOREFRONT_TOKEN_VAR: &str = "SHOPIFY_STOREFRONT_API_TOKEN";

const DEFAULT_API_VERSION: &str = "2023-07";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to load env file {path}: {reason}")]
    EnvFile { path: String, reason: String },
}

/// Load storefront configuration from the environment.
///
/// Loads `.env.local` and then `.env` from the working directory before
/// reading env vars. Variables already set in the process are never
/// overwritten, so `.env.local` takes precedence over `.env`.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_storefront_config() -> Result<StorefrontConfig, ConfigError> {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
    load_storefront_config_from_env()
}

/// Load storefront configuration after loading the given env file.
///
/// Unlike the implicit `.env.local`/`.env` lookup, an explicitly chosen file
/// must exist and parse.
///
/// # Errors
///
/// Returns [`ConfigError::EnvFile`] if the file cannot be read or parsed,
/// otherwise `ConfigError` if required env vars are missing or values are invalid.
pub fn load_storefront_config_from_file(path: &Path) -> Result<StorefrontConfig, ConfigError> {
    dotenvy::from_path(path).map_err(|e| ConfigError::EnvFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    load_storefront_config_from_env()
}

/// Load storefront configuration from environment variables already in the
/// process, without touching any env file.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_storefront_config_from_env() -> Result<StorefrontConfig, ConfigError> {
    build_storefront_config(|key| std::env::var(key))
}

/// Build storefront configuration using the provided env-var lookup function.
///
/// This is the parsing and validation behind the `load_*` functions,
/// decoupled from the process environment so callers and tests can drive it
/// with a plain `HashMap`.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn build_storefront_config<F>(lookup: F) -> Result<StorefrontConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    // Blank values count as unset, for required and optional vars alike.
    let present = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
    };

    let require = |var: &str| -> Result<String, ConfigError> {
        present(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        present(var).unwrap_or_else(|| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let store_domain = normalize_store_domain(&require(STORE_DOMAIN_VAR)?);
    let storefront_token = require(STOREFRONT_TOKEN_VAR)?;

    if store_domain.is_empty() || store_domain.contains('/') {
        return Err(ConfigError::InvalidEnvVar {
            var: STORE_DOMAIN_VAR.to_string(),
            reason: format!("expected a bare host name, got \"{store_domain}\""),
        });
    }

    let api_version = or_default("SWATCH_API_VERSION", DEFAULT_API_VERSION);
    let request_timeout_secs = parse_u64("SWATCH_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SWATCH_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("SWATCH_USER_AGENT", "swatch/0.1 (color-audit)");
    let log_level = or_default("SWATCH_LOG_LEVEL", "warn");

    Ok(StorefrontConfig {
        store_domain,
        storefront_token,
        api_version,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

/// Strips an optional scheme and trailing slashes so both
/// `example.myshopify.com` and `https://example.myshopify.com/` work.
fn normalize_store_domain(raw: &str) -> String {
    raw.strip_prefix("https://")
        .or_else(|| raw.strip_prefix("http://"))
        .unwrap_or(raw)
        .trim_end_matches('/')
        .to_owned()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
