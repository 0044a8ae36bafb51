//! dcl-ui-env - Deployment environment resolution for UI applications.
//!
//! Works out whether an application is running in development, staging,
//! or production, and exposes configuration values scoped to that
//! environment. One build can then serve every deployment.
//!
//! # Modules
//!
//! - [`environment`] - Environment codes, detection, and resolution
//! - [`config`] - Per-environment tables and the resolved lookup object
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use dcl_ui_env::{BuildOptions, Config, ConfigTable, Environment, EnvironmentVariables, Location};
//!
//! let table = ConfigTable::new()
//!     .with_entry(Environment::Staging, [("API_URL", "https://api.decentraland.today")])
//!     .with_entry(Environment::Production, [("API_URL", "https://api.decentraland.org")]);
//!
//! // A query parameter beats both the hostname and the variables.
//! let options = BuildOptions::new()
//!     .with_location(Location::new("builder.decentraland.org", "?env=stg"))
//!     .with_env_vars(EnvironmentVariables::new());
//!
//! let config = Config::build(&table, options).unwrap();
//! assert!(config.is(Environment::Staging));
//! assert_eq!(config.get("API_URL").unwrap(), Some("https://api.decentraland.today"));
//! ```

pub mod config;
pub mod environment;
pub mod error;

pub use config::{BuildOptions, Config, ConfigTable};
pub use environment::{
    resolve, resolve_default, Environment, EnvironmentSource, EnvironmentVariables, Location,
    ResolvedEnvironment,
};
pub use error::{EnvError, Result};
