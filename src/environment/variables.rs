//! Environment variable snapshots.
//!
//! Resolution never reads `std::env` behind the caller's back. It works on
//! an [`EnvironmentVariables`] snapshot, either taken from the process with
//! [`EnvironmentVariables::from_process`] or built by hand in tests.

use std::collections::HashMap;

/// A read-only snapshot of environment variables.
///
/// # Example
///
/// ```
/// use dcl_ui_env::EnvironmentVariables;
///
/// let vars: EnvironmentVariables = [("DCL_DEFAULT_ENV", "dev")].into_iter().collect();
/// assert_eq!(vars.get("DCL_DEFAULT_ENV"), Some("dev"));
/// assert_eq!(vars.get("VITE_DCL_DEFAULT_ENV"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentVariables {
    vars: HashMap<String, String>,
}

impl EnvironmentVariables {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Add or replace a variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Look up a variable.
    ///
    /// An empty value is treated the same as an unset one.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Returns `true` if the variable is set to a non-empty value.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvironmentVariables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for EnvironmentVariables {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}
