use oracle::{ConnStatus, Connection, Error};
use secrecy::{ExposeSecret, SecretString};

use crate::oracle::jdbc_url_to_connect_string;
use crate::pool::PoolConfiguration;

/// [`r2d2`] connection manager opening Oracle sessions for one set of credentials.
#[derive(Debug)]
pub struct OracleConnectionManager {
    connect_string: String,
    username: String,
    password: SecretString,
}

impl OracleConnectionManager {
    /// Creates a manager for `jdbc_url`, translated with [`jdbc_url_to_connect_string`].
    pub fn new(jdbc_url: &str, username: impl Into<String>, password: SecretString) -> Self {
        Self {
            connect_string: jdbc_url_to_connect_string(jdbc_url).into_owned(),
            username: username.into(),
            password,
        }
    }

    pub fn from_config(config: &PoolConfiguration) -> Self {
        Self::new(config.jdbc_url(), config.username(), config.password().clone())
    }

    /// Connect string handed to the Oracle client.
    pub fn connect_string(&self) -> &str {
        &self.connect_string
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl r2d2::ManageConnection for OracleConnectionManager {
    type Connection = Connection;
    type Error = Error;

    fn connect(&self) -> Result<Self::Connection, Self::Error> {
        Connection::connect(
            &self.username,
            self.password.expose_secret(),
            &self.connect_string,
        )
    }

    fn is_valid(&self, conn: &mut Self::Connection) -> Result<(), Self::Error> {
        conn.ping()
    }

    fn has_broken(&self, conn: &mut Self::Connection) -> bool {
        !matches!(conn.status(), Ok(ConnStatus::Normal))
    }
}
