//! Environment detection and resolution.
//!
//! Determines which deployment environment (dev, stg, prod) the
//! application is running in. The priority chain is:
//!
//! 1. `env` query parameter on the page location
//! 2. Hostname top-level domain
//! 3. `DCL_DEFAULT_ENV` and its bundler-prefixed aliases
//! 4. Fallback to production

pub mod detection;
pub mod resolver;
pub mod types;
pub mod variables;

pub use detection::{
    detect, from_query_parameter, from_top_level_domain, DetectedEnvironment, Location,
};
pub use resolver::{
    resolve, resolve_default, EnvironmentSource, ResolvedEnvironment, DEFAULT_ENV_ALIASES,
};
pub use types::Environment;
pub use variables::EnvironmentVariables;
