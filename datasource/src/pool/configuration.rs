use std::time::Duration;

use config::shared::{PoolSettings, ValidationError};
use secrecy::SecretString;

/// Everything needed to build one connection pool.
///
/// Produced by a [`ConfigBuilder`](crate::pool::ConfigBuilder). Apart from the
/// connection initialization statement the values are fixed once built.
#[derive(Debug, Clone)]
pub struct PoolConfiguration {
    jdbc_url: String,
    username: String,
    password: SecretString,
    min_idle: u32,
    max_size: u32,
    connection_timeout: Duration,
    idle_timeout: Option<Duration>,
    max_lifetime: Option<Duration>,
    test_on_check_out: bool,
    eager_initialization: bool,
    connection_init_sql: Option<String>,
}

impl PoolConfiguration {
    /// Builds a configuration for the given connection from pool-wide `settings`.
    ///
    /// `min_idle` is capped at [`PoolSettings::max_size`].
    pub fn from_settings(
        jdbc_url: impl Into<String>,
        username: impl Into<String>,
        password: SecretString,
        min_idle: u32,
        settings: &PoolSettings,
    ) -> Result<Self, ValidationError> {
        settings.validate()?;

        Ok(Self {
            jdbc_url: jdbc_url.into(),
            username: username.into(),
            password,
            min_idle: min_idle.min(settings.max_size),
            max_size: settings.max_size,
            connection_timeout: settings.connection_timeout(),
            idle_timeout: settings.idle_timeout(),
            max_lifetime: settings.max_lifetime(),
            test_on_check_out: settings.test_on_check_out,
            eager_initialization: settings.eager_initialization,
            connection_init_sql: None,
        })
    }

    /// Sets the statement every new physical connection runs before it is handed out.
    pub fn set_connection_init_sql(&mut self, sql: impl Into<String>) {
        self.connection_init_sql = Some(sql.into());
    }

    pub fn connection_init_sql(&self) -> Option<&str> {
        self.connection_init_sql.as_deref()
    }

    pub fn jdbc_url(&self) -> &str {
        &self.jdbc_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn min_idle(&self) -> u32 {
        self.min_idle
    }

    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    pub fn connection_timeout(&self) -> Duration {
        self.connection_timeout
    }

    pub fn idle_timeout(&self) -> Option<Duration> {
        self.idle_timeout
    }

    pub fn max_lifetime(&self) -> Option<Duration> {
        self.max_lifetime
    }

    pub fn test_on_check_out(&self) -> bool {
        self.test_on_check_out
    }

    pub fn eager_initialization(&self) -> bool {
        self.eager_initialization
    }
}
