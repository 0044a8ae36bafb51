//! Library integration tests.

use dcl_ui_env::EnvError;

#[test]
fn error_types_are_public() {
    let err = EnvError::InvalidEnvironment {
        value: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> dcl_ui_env::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn environment_types_are_public() {
    use dcl_ui_env::environment::{
        detect, from_query_parameter, from_top_level_domain, EnvironmentSource, DEFAULT_ENV_ALIASES,
    };
    use dcl_ui_env::{Environment, Location};

    let location = Location::new("builder.decentraland.zone", "");
    assert_eq!(
        from_top_level_domain(&location),
        Some(Environment::Development)
    );
    assert_eq!(from_query_parameter(&location), None);
    assert_eq!(
        detect(&location).map(|d| d.detected_via),
        Some(EnvironmentSource::TopLevelDomain)
    );
    assert_eq!(DEFAULT_ENV_ALIASES[0], "DCL_DEFAULT_ENV");
}

#[test]
fn public_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<dcl_ui_env::Config>();
    assert_send_sync::<dcl_ui_env::ConfigTable>();
    assert_send_sync::<dcl_ui_env::EnvironmentVariables>();
    assert_send_sync::<dcl_ui_env::Location>();
    assert_send_sync::<EnvError>();
}
