//! Integration tests for config module public API.

use dcl_ui_env::config::{BuildOptions, Config, ConfigTable};
use dcl_ui_env::{EnvError, Environment, EnvironmentSource, EnvironmentVariables, Location};

fn vars(pairs: &[(&str, &str)]) -> EnvironmentVariables {
    pairs.iter().copied().collect()
}

#[test]
fn in_memory_table_workflow() {
    let table = ConfigTable::new()
        .with_entry(
            Environment::Development,
            [("API_URL", "https://api.decentraland.zone")],
        )
        .with_entry(
            Environment::Staging,
            [("API_URL", "https://api.decentraland.today")],
        )
        .with_entry(
            Environment::Production,
            [("API_URL", "https://api.decentraland.org")],
        );
    let config = Config::build(
        &table,
        BuildOptions::new().with_env_vars(vars(&[("VITE_DCL_DEFAULT_ENV", "stg")])),
    )
    .unwrap();

    assert_eq!(config.env(), Environment::Staging);
    assert_eq!(
        config.source(),
        &EnvironmentSource::Variable("VITE_DCL_DEFAULT_ENV")
    );
    assert_eq!(
        config.get("API_URL").unwrap(),
        Some("https://api.decentraland.today")
    );
}

#[test]
fn precedence_chain_end_to_end() {
    let table = ConfigTable::new()
        .with_entry(Environment::Development, [("FOO", "bar-dev")])
        .with_entry(Environment::Staging, [("FOO", "bar-stg")])
        .with_entry(Environment::Production, [("FOO", "bar-prod")]);
    let env_vars = vars(&[("DCL_DEFAULT_ENV", "dev")]);

    // Query parameter
    let config = Config::build(
        &table,
        BuildOptions::new()
            .with_location(Location::parse("https://builder.decentraland.org/?ENV=STG").unwrap())
            .with_env_vars(env_vars.clone()),
    )
    .unwrap();
    assert_eq!(config.get("FOO").unwrap(), Some("bar-stg"));

    // Hostname
    let config = Config::build(
        &table,
        BuildOptions::new()
            .with_location(Location::parse("https://builder.decentraland.org/").unwrap())
            .with_env_vars(env_vars.clone()),
    )
    .unwrap();
    assert_eq!(config.get("FOO").unwrap(), Some("bar-prod"));

    // Variables
    let config = Config::build(
        &table,
        BuildOptions::new()
            .with_location(Location::parse("http://localhost:3000/").unwrap())
            .with_env_vars(env_vars),
    )
    .unwrap();
    assert_eq!(config.get("FOO").unwrap(), Some("bar-dev"));

    // Fallback
    let config = Config::build(&table, BuildOptions::new().with_env_vars(vars(&[]))).unwrap();
    assert_eq!(config.get("FOO").unwrap(), Some("bar-prod"));
}

#[test]
fn missing_environment_entry_fails_on_get() {
    let table = ConfigTable::new().with_entry(Environment::Development, [("FOO", "bar-dev")]);
    let config = Config::build(
        &table,
        BuildOptions::new().with_env_vars(vars(&[("GATSBY_DCL_DEFAULT_ENV", "prod")])),
    )
    .unwrap();

    assert!(config.is(Environment::Production));
    let err = config.get("FOO").unwrap_err();
    assert!(matches!(err, EnvError::MissingEnvironmentConfig { .. }));
    assert_eq!(err.to_string(), "Could not find a config for env=prod");
}

#[test]
fn conflicting_aliases_fail_build() {
    let table = ConfigTable::new();
    let err = Config::build(
        &table,
        BuildOptions::new().with_env_vars(vars(&[
            ("DCL_DEFAULT_ENV", "dev"),
            ("REACT_APP_DCL_DEFAULT_ENV", "prod"),
        ])),
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "You have defined both DCL_DEFAULT_ENV and REACT_APP_DCL_DEFAULT_ENV with different values"
    );
}
