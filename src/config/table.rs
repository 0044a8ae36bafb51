//! Per-environment configuration tables.
//!
//! A [`ConfigTable`] maps each environment to a flat key/value table. It is
//! supplied in memory by the caller; serde support lets an application embed
//! it in whatever settings structure it already deserializes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::environment::Environment;

/// Settings for one environment.
pub type EnvironmentConfig = BTreeMap<String, String>;

/// Key/value settings for each environment. Not every environment needs
/// an entry.
///
/// # Example
///
/// ```
/// use dcl_ui_env::{ConfigTable, Environment};
///
/// let table = ConfigTable::new().with_entry(Environment::Staging, [("FOO", "bar-stg")]);
/// assert_eq!(
///     table.entry(Environment::Staging).and_then(|c| c.get("FOO")).map(String::as_str),
///     Some("bar-stg")
/// );
/// assert!(table.entry(Environment::Production).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigTable {
    entries: BTreeMap<Environment, EnvironmentConfig>,
}

impl ConfigTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one key for an environment, creating its entry if needed.
    pub fn insert(
        &mut self,
        environment: Environment,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.entries
            .entry(environment)
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Replace the whole entry for an environment.
    pub fn with_entry<K, V>(
        mut self,
        environment: Environment,
        config: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.entries.insert(
            environment,
            config
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// The entry for an environment, if there is one.
    pub fn entry(&self, environment: Environment) -> Option<&EnvironmentConfig> {
        self.entries.get(&environment)
    }

    /// Environments that have an entry.
    pub fn environments(&self) -> impl Iterator<Item = Environment> + '_ {
        self.entries.keys().copied()
    }
}

impl FromIterator<(Environment, EnvironmentConfig)> for ConfigTable {
    fn from_iter<I: IntoIterator<Item = (Environment, EnvironmentConfig)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
