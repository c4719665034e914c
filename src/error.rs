//! Error types for the cache crate
//!
//! The data path (`set`/`get`/`remove`/`clear`) is infallible: a missing key
//! reads as `None`, not as an error. The only fallible edge is configuration
//! loading.

use thiserror::Error;

// == Config Error ==
/// Errors raised while loading configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable was set but could not be parsed
    #[error("invalid value {value:?} for {var}")]
    InvalidEnvVar { var: &'static str, value: String },
}
