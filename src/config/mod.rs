//! Environment-scoped configuration.
//!
//! - Per-environment key/value tables in [`table`]
//! - The resolved lookup object in [`accessor`]
//!
//! # Example
//!
//! ```
//! use dcl_ui_env::config::{BuildOptions, Config, ConfigTable};
//! use dcl_ui_env::{Environment, Location};
//!
//! let table = ConfigTable::new().with_entry(
//!     Environment::Staging,
//!     [("FEATURE_FLAGS", "https://feature-flags.decentraland.today")],
//! );
//!
//! let location = Location::parse("https://builder.decentraland.today/").unwrap();
//! let config = Config::build(&table, BuildOptions::new().with_location(location)).unwrap();
//!
//! assert_eq!(config.env(), Environment::Staging);
//! assert_eq!(
//!     config.get("FEATURE_FLAGS").unwrap(),
//!     Some("https://feature-flags.decentraland.today")
//! );
//! ```

pub mod accessor;
pub mod table;

pub use accessor::{BuildOptions, Config};
pub use table::{ConfigTable, EnvironmentConfig};
