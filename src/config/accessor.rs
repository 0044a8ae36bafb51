//! Environment-scoped config lookup.

use crate::config::table::{ConfigTable, EnvironmentConfig};
use crate::environment::{
    Environment, EnvironmentSource, EnvironmentVariables, Location, ResolvedEnvironment,
};
use crate::error::{EnvError, Result};

/// Inputs to environment resolution when building a [`Config`].
///
/// The default has no location and reads the process environment.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Page location, if one is observable.
    pub location: Option<Location>,
    /// Variables to read instead of the process environment.
    pub env_vars: Option<EnvironmentVariables>,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_env_vars(mut self, env_vars: EnvironmentVariables) -> Self {
        self.env_vars = Some(env_vars);
        self
    }
}

/// Config values for the resolved environment.
///
/// The environment is resolved once, in [`Config::build`]. Lookups after
/// that are pure.
///
/// # Example
///
/// ```
/// use dcl_ui_env::{BuildOptions, Config, ConfigTable, Environment, EnvironmentVariables};
///
/// let table = ConfigTable::new()
///     .with_entry(Environment::Development, [("API_URL", "https://api.decentraland.zone")])
///     .with_entry(Environment::Production, [("API_URL", "https://api.decentraland.org")]);
///
/// let vars: EnvironmentVariables = [("DCL_DEFAULT_ENV", "dev")].into_iter().collect();
/// let config = Config::build(&table, BuildOptions::new().with_env_vars(vars)).unwrap();
///
/// assert!(config.is(Environment::Development));
/// assert_eq!(config.get("API_URL").unwrap(), Some("https://api.decentraland.zone"));
/// assert_eq!(config.get_or("TIMEOUT", "30").unwrap(), "30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    resolved: ResolvedEnvironment,
    values: Option<EnvironmentConfig>,
}

impl Config {
    /// Resolve the environment and bind its entry from `table`.
    ///
    /// # Errors
    ///
    /// Propagates `ConflictingEnvironment` and `InvalidEnvironment` from
    /// resolution. A missing entry is not an error here; it surfaces on
    /// the first [`get`](Self::get).
    pub fn build(table: &ConfigTable, options: BuildOptions) -> Result<Self> {
        let resolved =
            ResolvedEnvironment::resolve(options.location.as_ref(), options.env_vars.as_ref())?;
        let values = table.entry(resolved.environment).cloned();

        if values.is_none() {
            tracing::debug!("No config entry for env={}", resolved.environment);
        }

        Ok(Self { resolved, values })
    }

    /// Look up a key.
    ///
    /// Returns `Ok(None)` if the environment has an entry but not this key.
    ///
    /// # Errors
    ///
    /// Returns `MissingEnvironmentConfig` if the table had no entry for the
    /// resolved environment.
    pub fn get(&self, key: &str) -> Result<Option<&str>> {
        let values = self
            .values
            .as_ref()
            .ok_or(EnvError::MissingEnvironmentConfig {
                environment: self.resolved.environment,
            })?;
        Ok(values.get(key).map(String::as_str))
    }

    /// Look up a key, falling back to `default` if it's absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> Result<&'a str> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Returns true iff `environment` is the resolved one.
    pub fn is(&self, environment: Environment) -> bool {
        self.resolved.environment == environment
    }

    /// The resolved environment.
    pub fn env(&self) -> Environment {
        self.resolved.environment
    }

    /// How the environment was resolved.
    pub fn source(&self) -> &EnvironmentSource {
        &self.resolved.source
    }
}
