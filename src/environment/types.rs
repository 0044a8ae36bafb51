//! The fixed set of deployment environments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EnvError, Result};

/// A deployment environment.
///
/// Each variant has a canonical short code (`dev`, `stg`, `prod`) used
/// for parsing, display, and serialization.
///
/// # Example
///
/// ```
/// use dcl_ui_env::Environment;
///
/// let env = Environment::parse("stg").unwrap();
/// assert_eq!(env, Environment::Staging);
/// assert_eq!(env.to_string(), "stg");
/// assert!(Environment::parse("qa").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

static ALL: [Environment; 3] = [
    Environment::Development,
    Environment::Staging,
    Environment::Production,
];

impl Environment {
    /// All environments, in declaration order.
    pub fn list() -> impl Iterator<Item = Environment> + Clone {
        ALL.iter().copied()
    }

    /// The canonical short code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Development => "dev",
            Self::Staging => "stg",
            Self::Production => "prod",
        }
    }

    /// Returns true iff `value` is exactly one of the short codes.
    pub fn is_valid(value: &str) -> bool {
        Self::list().any(|env| env.code() == value)
    }

    /// Parse a short code.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEnvironment` for anything other than `dev`, `stg`
    /// or `prod`. Matching is case-sensitive.
    pub fn parse(value: &str) -> Result<Self> {
        Self::list()
            .find(|env| env.code() == value)
            .ok_or_else(|| EnvError::InvalidEnvironment {
                value: value.to_string(),
            })
    }

    /// `"dev", "stg", "prod"`, for error messages.
    pub(crate) fn quoted_codes() -> String {
        Self::list()
            .map(|env| format!("\"{}\"", env.code()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Environment {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Environment {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Environment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_returns_all_three_in_order() {
        let envs: Vec<_> = Environment::list().collect();
        assert_eq!(
            envs,
            vec![
                Environment::Development,
                Environment::Staging,
                Environment::Production
            ]
        );
    }

    #[test]
    fn list_is_restartable() {
        let list = Environment::list();
        assert_eq!(list.clone().count(), 3);
        assert_eq!(list.count(), 3);
    }

    #[test]
    fn valid_codes_are_valid() {
        assert!(Environment::is_valid("dev"));
        assert!(Environment::is_valid("stg"));
        assert!(Environment::is_valid("prod"));
    }

    #[test]
    fn other_strings_are_invalid() {
        assert!(!Environment::is_valid("invalid"));
        assert!(!Environment::is_valid(""));
        assert!(!Environment::is_valid("PROD"));
        assert!(!Environment::is_valid("production"));
    }

    #[test]
    fn parse_round_trips_codes() {
        for env in Environment::list() {
            assert_eq!(Environment::parse(env.code()).unwrap(), env);
        }
    }

    #[test]
    fn parse_rejects_invalid() {
        let err = Environment::parse("invalid").unwrap_err();
        assert!(matches!(err, EnvError::InvalidEnvironment { ref value } if value == "invalid"));
        let msg = err.to_string();
        assert!(msg.contains("\"dev\""));
        assert!(msg.contains("\"stg\""));
        assert!(msg.contains("\"prod\""));
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let env: Environment = "prod".parse().unwrap();
        assert_eq!(env, Environment::Production);
        assert!("nope".parse::<Environment>().is_err());
    }

    #[test]
    fn serde_uses_short_codes() {
        assert_eq!(
            serde_json::to_string(&Environment::Staging).unwrap(),
            "\"stg\""
        );
        let env: Environment = serde_json::from_str("\"dev\"").unwrap();
        assert_eq!(env, Environment::Development);
        assert!(serde_json::from_str::<Environment>("\"qa\"").is_err());
    }
}
