use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::Config;

/// Connection descriptor for an Oracle database.
///
/// The JDBC URL and credentials are passed through to the driver untouched; a
/// malformed value only surfaces once the pool opens a physical connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OracleConnectionConfig {
    /// JDBC-style URL, e.g. `jdbc:oracle:thin:@host:1521/service`.
    pub jdbc_url: String,
    /// Username to authenticate with.
    pub username: String,
    /// Password for [`OracleConnectionConfig::username`]. Redacted in debug output.
    pub password: SecretString,
    /// Whether every new session must set `_ORACLE_SCRIPT`.
    ///
    /// Some installations (for example the default configuration of Oracle docker
    /// images) need this to create users and schemas without the `C##` prefix.
    #[serde(default)]
    pub oracle_script_required: bool,
}

impl Config for OracleConnectionConfig {
    const LIST_PARSE_KEYS: &'static [&'static str] = &[];
}

/// [`OracleConnectionConfig`] without the password, safe to log or serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OracleConnectionConfigWithoutSecrets {
    pub jdbc_url: String,
    pub username: String,
    #[serde(default)]
    pub oracle_script_required: bool,
}

impl From<OracleConnectionConfig> for OracleConnectionConfigWithoutSecrets {
    fn from(value: OracleConnectionConfig) -> Self {
        OracleConnectionConfigWithoutSecrets {
            jdbc_url: value.jdbc_url,
            username: value.username,
            oracle_script_required: value.oracle_script_required,
        }
    }
}
