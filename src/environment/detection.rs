//! Location-based environment detection.
//!
//! Detects the environment from the page location: an explicit `env`
//! query parameter, or the suffix of the hostname.

use url::{form_urlencoded, Url};

use super::resolver::EnvironmentSource;
use super::types::Environment;

/// The observable parts of a page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Hostname, without port.
    pub host: String,
    /// Raw query string. The leading `?` is optional.
    pub search: String,
}

impl Location {
    /// Create a location from its parts.
    pub fn new(host: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            search: search.into(),
        }
    }

    /// Parse a full URL into a location.
    ///
    /// # Example
    ///
    /// ```
    /// use dcl_ui_env::Location;
    ///
    /// let location = Location::parse("https://builder.decentraland.org:443/scenes?env=dev").unwrap();
    /// assert_eq!(location.host, "builder.decentraland.org");
    /// assert_eq!(location.search, "env=dev");
    /// ```
    pub fn parse(url: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(url)?;
        Ok(Self {
            host: url.host_str().unwrap_or_default().to_string(),
            search: url.query().unwrap_or_default().to_string(),
        })
    }
}

/// An environment detected from a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedEnvironment {
    /// The detected environment.
    pub environment: Environment,
    /// The signal that triggered detection; `QueryParameter` or
    /// `TopLevelDomain`.
    pub detected_via: EnvironmentSource,
}

/// Hostname suffixes, checked in order.
const TLD_RULES: &[(&str, Environment)] = &[
    (".org", Environment::Production),
    (".co", Environment::Production),
    (".today", Environment::Staging),
    (".net", Environment::Staging),
    (".io", Environment::Development),
    (".zone", Environment::Development),
];

/// Map the hostname suffix to an environment.
///
/// This is a literal suffix test, not a TLD parser: `localhost` or any
/// unlisted domain yields `None`.
pub fn from_top_level_domain(location: &Location) -> Option<Environment> {
    TLD_RULES
        .iter()
        .find(|(suffix, _)| location.host.ends_with(suffix))
        .map(|&(_, env)| env)
}

/// Read the environment from an `env` query parameter.
///
/// An exact `ENV` parameter wins over `env`, which wins over any other
/// casing. The value is case-insensitive. An absent, empty, or unknown
/// value yields `None`.
pub fn from_query_parameter(location: &Location) -> Option<Environment> {
    let search = location.search.strip_prefix('?').unwrap_or(&location.search);
    let params: Vec<_> = form_urlencoded::parse(search.as_bytes())
        .filter(|(_, value)| !value.is_empty())
        .collect();

    let (_, value) = ["ENV", "env"]
        .into_iter()
        .find_map(|wanted| params.iter().find(|(name, _)| name == wanted))
        .or_else(|| params.iter().find(|(name, _)| name.eq_ignore_ascii_case("env")))?;

    let value = value.to_lowercase();
    match Environment::parse(&value) {
        Ok(env) => Some(env),
        Err(_) => {
            tracing::trace!("Ignoring unknown env query parameter '{}'", value);
            None
        }
    }
}

/// Detect the environment from a location.
///
/// The query parameter is checked before the hostname.
pub fn detect(location: &Location) -> Option<DetectedEnvironment> {
    if let Some(environment) = from_query_parameter(location) {
        return Some(DetectedEnvironment {
            environment,
            detected_via: EnvironmentSource::QueryParameter,
        });
    }

    from_top_level_domain(location).map(|environment| DetectedEnvironment {
        environment,
        detected_via: EnvironmentSource::TopLevelDomain,
    })
}
