//! Environment-driven server configuration.

use std::{net::SocketAddr, str::FromStr, time::Duration};

use crate::server::{error::config::ConfigError, scheduler::config as refresh_config};

/// Default address the HTTP API binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8888";

/// Runtime configuration read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// SeaORM database URL (`sqlite://...` or `postgres://...`)
    pub database_url: String,
    /// Base URL of the flight status provider
    pub provider_url: String,
    /// Optional bearer token sent to the status provider
    pub provider_api_key: Option<String>,
    /// User agent sent to the status provider
    pub user_agent: String,
    /// Address the HTTP API binds to
    pub bind_address: SocketAddr,
    /// Time between scheduled refresh cycles
    pub refresh_interval: Duration,
    /// Upper bound for a single provider query
    pub provider_timeout: Duration,
    /// Number of provider queries in flight during a refresh cycle
    pub refresh_concurrency: usize,
}

impl Config {
    /// Reads the configuration from process environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and all values valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `PROVIDER_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - An optional variable could not be parsed or is zero
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            provider_url: required("PROVIDER_URL")?,
            provider_api_key: lookup("PROVIDER_API_KEY").filter(|key| !key.is_empty()),
            user_agent: lookup("USER_AGENT")
                .unwrap_or_else(|| format!("skyward/{}", env!("CARGO_PKG_VERSION"))),
            bind_address: parse_or(
                &lookup,
                "BIND_ADDRESS",
                SocketAddr::from_str(DEFAULT_BIND_ADDRESS).map_err(|e| {
                    ConfigError::InvalidEnvValue {
                        var: "BIND_ADDRESS".to_string(),
                        reason: e.to_string(),
                    }
                })?,
            )?,
            refresh_interval: Duration::from_secs(nonzero_or(
                &lookup,
                "REFRESH_INTERVAL_SECS",
                refresh_config::DEFAULT_INTERVAL.as_secs(),
            )?),
            provider_timeout: Duration::from_secs(nonzero_or(
                &lookup,
                "PROVIDER_TIMEOUT_SECS",
                refresh_config::DEFAULT_PROVIDER_TIMEOUT.as_secs(),
            )?),
            refresh_concurrency: nonzero_or(
                &lookup,
                "REFRESH_CONCURRENCY",
                refresh_config::DEFAULT_CONCURRENCY,
            )?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}

/// Like [`parse_or`], but rejects zero.
fn nonzero_or<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Default + PartialEq,
    T::Err: std::fmt::Display,
{
    let value = parse_or(lookup, var, default)?;
    if value == T::default() {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(value)
}
