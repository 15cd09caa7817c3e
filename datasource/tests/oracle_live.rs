//! Tests against a running Oracle instance.
//!
//! Connection details come from `ORACLE_JDBC_URL`, `ORACLE_USERNAME` and `ORACLE_PASSWORD`
//! and default to the `gvenzl/oracle-free` docker image.

use config::shared::PoolSettings;
use datasource::DataSourceError;
use datasource::oracle::{ORACLE_SCRIPT_INIT_SQL, OracleDataSourceFactory, verify_connection};
use secrecy::SecretString;
use telemetry::init_test_tracing;

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn jdbc_url() -> String {
    env_or("ORACLE_JDBC_URL", "jdbc:oracle:thin:@localhost:1521/FREEPDB1")
}

fn username() -> String {
    env_or("ORACLE_USERNAME", "system")
}

fn password() -> SecretString {
    SecretString::new(env_or("ORACLE_PASSWORD", "oracle"))
}

#[test]
fn verify_connection_succeeds_with_valid_credentials() {
    init_test_tracing();

    let verification = verify_connection(&jdbc_url(), &username(), &password());

    assert!(verification.has_succeeded, "{}", verification.message);
    assert_eq!(verification.message, "successful");
}

#[test]
fn verify_connection_reports_wrong_password() {
    init_test_tracing();

    let verification = verify_connection(
        &jdbc_url(),
        &username(),
        &SecretString::new("wrong_password".to_string()),
    );

    assert!(!verification.has_succeeded);
    assert!(
        verification.message.contains("ORA-01017"),
        "unexpected message: {}",
        verification.message
    );
}

#[test]
fn eager_pool_opens_minimum_idle_connections() {
    init_test_tracing();
    let factory = OracleDataSourceFactory::with_settings(PoolSettings::default());

    let data_source = factory
        .create_data_source(&jdbc_url(), &username(), &password(), false)
        .unwrap();

    assert!(data_source.state().connections >= 2);
    let conn = data_source.get().unwrap();
    let one: i64 = conn.query_row_as("select 1 from dual", &[]).unwrap();
    assert_eq!(one, 1);
}

#[test]
fn oracle_script_session_runs_init_statement() {
    init_test_tracing();
    let factory = OracleDataSourceFactory::with_settings(PoolSettings {
        max_size: 2,
        ..Default::default()
    });

    let data_source = factory
        .create_data_source(&jdbc_url(), &username(), &password(), true)
        .unwrap();

    assert_eq!(data_source.connection_init_sql(), Some(ORACLE_SCRIPT_INIT_SQL));
    let conn = data_source.get().unwrap();
    let one: i64 = conn.query_row_as("select 1 from dual", &[]).unwrap();
    assert_eq!(one, 1);
}

#[test]
fn eager_pool_with_wrong_password_fails_to_build() {
    init_test_tracing();
    let factory = OracleDataSourceFactory::with_settings(PoolSettings {
        connection_timeout_ms: 2_000,
        ..Default::default()
    });

    let err = factory
        .create_data_source(
            &jdbc_url(),
            &username(),
            &SecretString::new("wrong_password".to_string()),
            false,
        )
        .unwrap_err();

    assert!(matches!(err, DataSourceError::Pool(_)), "{err:?}");
}
