//! Error types for environment resolution and config lookup.
//!
//! This module defines [`EnvError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every failure is terminal; nothing is retried or downgraded
//! - Detection signals that don't match are `None`, never an error
//! - Messages name the offending value so the caller can fix it

use thiserror::Error;

use crate::environment::Environment;

/// Core error type for environment resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// A string was parsed as an environment code and matched none of them.
    #[error(
        "Invalid environment \"{value}\", possible values are {}",
        Environment::quoted_codes()
    )]
    InvalidEnvironment { value: String },

    /// Two default-environment aliases are set to different values.
    #[error("You have defined both {first} and {second} with different values")]
    ConflictingEnvironment {
        first: &'static str,
        second: &'static str,
    },

    /// `get` was called but the config table has no entry for the environment.
    #[error("Could not find a config for env={environment}")]
    MissingEnvironmentConfig { environment: Environment },
}

/// Result type alias for environment operations.
pub type Result<T> = std::result::Result<T, EnvError>;
