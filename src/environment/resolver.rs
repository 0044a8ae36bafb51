//! Environment resolution.
//!
//! Resolves the active environment using the priority chain:
//! 1. `env` query parameter
//! 2. Hostname top-level domain
//! 3. Default-environment variables (`DCL_DEFAULT_ENV` and its aliases)
//! 4. Fallback to production

use std::fmt;

use super::detection::{self, Location};
use super::types::Environment;
use super::variables::EnvironmentVariables;
use crate::error::{EnvError, Result};

/// Variables naming the default environment, in precedence order.
///
/// The prefixed names are what front-end bundlers expose to client code.
pub const DEFAULT_ENV_ALIASES: [&str; 4] = [
    "DCL_DEFAULT_ENV",
    "REACT_APP_DCL_DEFAULT_ENV",
    "VITE_DCL_DEFAULT_ENV",
    "GATSBY_DCL_DEFAULT_ENV",
];

/// How the environment was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentSource {
    /// An `env` query parameter on the location.
    QueryParameter,
    /// The location's hostname suffix.
    TopLevelDomain,
    /// A default-environment variable; holds the alias name.
    Variable(&'static str),
    /// Nothing matched; production.
    Fallback,
}

impl fmt::Display for EnvironmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueryParameter => write!(f, "query parameter"),
            Self::TopLevelDomain => write!(f, "top-level domain"),
            Self::Variable(name) => write!(f, "variable {}", name),
            Self::Fallback => write!(f, "default"),
        }
    }
}

/// A resolved environment and how it was determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEnvironment {
    /// The active environment.
    pub environment: Environment,
    /// How this environment was determined.
    pub source: EnvironmentSource,
}

impl ResolvedEnvironment {
    /// Resolve the environment using the priority chain.
    ///
    /// # Arguments
    ///
    /// * `location` - Page location, if one is observable
    /// * `env_vars` - Variables to read; `None` snapshots the process environment
    ///
    /// # Example
    ///
    /// ```
    /// use dcl_ui_env::{Environment, EnvironmentSource, EnvironmentVariables, Location, ResolvedEnvironment};
    ///
    /// let location = Location::new("builder.decentraland.org", "?env=stg");
    /// let vars: EnvironmentVariables = [("DCL_DEFAULT_ENV", "dev")].into_iter().collect();
    ///
    /// let resolved = ResolvedEnvironment::resolve(Some(&location), Some(&vars)).unwrap();
    /// assert_eq!(resolved.environment, Environment::Staging);
    /// assert_eq!(resolved.source, EnvironmentSource::QueryParameter);
    /// ```
    pub fn resolve(
        location: Option<&Location>,
        env_vars: Option<&EnvironmentVariables>,
    ) -> Result<Self> {
        // 1-2. Query parameter, then hostname
        if let Some(detected) = location.and_then(detection::detect) {
            tracing::debug!(
                "Environment '{}' detected via {}",
                detected.environment,
                detected.detected_via
            );
            return Ok(Self {
                environment: detected.environment,
                source: detected.detected_via,
            });
        }

        // 3-4. Variables, then fallback
        match env_vars {
            Some(vars) => Self::resolve_default(vars),
            None => Self::resolve_default(&EnvironmentVariables::from_process()),
        }
    }

    /// Resolve from default-environment variables only.
    ///
    /// # Errors
    ///
    /// Returns `ConflictingEnvironment` if any two set aliases disagree, and
    /// `InvalidEnvironment` if the winning alias holds an unknown code.
    pub fn resolve_default(env_vars: &EnvironmentVariables) -> Result<Self> {
        let set: Vec<(&'static str, &str)> = DEFAULT_ENV_ALIASES
            .iter()
            .filter_map(|&name| env_vars.get(name).map(|value| (name, value)))
            .collect();

        for (i, &(first, first_value)) in set.iter().enumerate() {
            for &(second, second_value) in &set[i + 1..] {
                if first_value != second_value {
                    tracing::warn!(
                        "{}='{}' conflicts with {}='{}'",
                        first,
                        first_value,
                        second,
                        second_value
                    );
                    return Err(EnvError::ConflictingEnvironment { first, second });
                }
            }
        }

        match set.first() {
            Some(&(name, value)) => {
                let environment = Environment::parse(value)?;
                tracing::debug!("Environment '{}' set via {}", environment, name);
                Ok(Self {
                    environment,
                    source: EnvironmentSource::Variable(name),
                })
            }
            None => {
                tracing::debug!("No default environment variable set, using production");
                Ok(Self {
                    environment: Environment::Production,
                    source: EnvironmentSource::Fallback,
                })
            }
        }
    }
}

/// Resolve the default environment from variables alone.
///
/// See [`ResolvedEnvironment::resolve_default`].
pub fn resolve_default(env_vars: &EnvironmentVariables) -> Result<Environment> {
    ResolvedEnvironment::resolve_default(env_vars).map(|r| r.environment)
}

/// Resolve the active environment.
///
/// See [`ResolvedEnvironment::resolve`].
pub fn resolve(
    location: Option<&Location>,
    env_vars: Option<&EnvironmentVariables>,
) -> Result<Environment> {
    ResolvedEnvironment::resolve(location, env_vars).map(|r| r.environment)
}
