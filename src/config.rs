//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Cache engine configuration.
///
/// Fixed at engine construction; there is no way to change capacity or the
/// default TTL on a live engine, which makes their effect deterministic.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// TTL applied to writes that do not specify one
    pub default_ttl: Duration,
    /// Interval between background sweeper passes
    pub sweep_interval: Duration,
}

impl CacheConfig {
    /// Creates a CacheConfig from environment variables.
    ///
    /// Unset variables fall back to defaults; a variable that is set but
    /// does not parse is an error rather than a silent default.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 512)
    /// - `CACHE_DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 3600000)
    /// - `CACHE_SWEEP_INTERVAL_MS` - Sweeper interval in milliseconds (default: 10000)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let sweep_interval_ms: u64 = env_parse(
            "CACHE_SWEEP_INTERVAL_MS",
            defaults.sweep_interval.as_millis() as u64,
        )?;
        if sweep_interval_ms == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: "CACHE_SWEEP_INTERVAL_MS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            capacity: env_parse("CACHE_CAPACITY", defaults.capacity)?,
            default_ttl: Duration::from_millis(env_parse(
                "CACHE_DEFAULT_TTL_MS",
                defaults.default_ttl.as_millis() as u64,
            )?),
            sweep_interval: Duration::from_millis(sweep_interval_ms),
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 512,
            default_ttl: Duration::from_secs(3600),
            sweep_interval: Duration::from_secs(10),
        }
    }
}

/// Reads and parses one environment variable, falling back to `default`
/// when it is unset.
fn env_parse<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar { var, value: raw }),
        Err(_) => Ok(default),
    }
}
