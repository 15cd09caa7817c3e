use std::sync::Arc;

use config::shared::PoolSettings;
use secrecy::SecretString;
use tracing::{debug, warn};

use crate::error::DataSourceResult;
use crate::pool::PoolConfiguration;

/// Produces a vendor-agnostic base [`PoolConfiguration`] for a connection.
///
/// Vendor factories call this first and then apply their own session settings, so a
/// single implementation can back the factories of every supported database.
pub trait ConfigBuilder: Send + Sync {
    fn build_config(
        &self,
        jdbc_url: &str,
        username: &str,
        password: &SecretString,
        min_idle: u32,
    ) -> DataSourceResult<PoolConfiguration>;
}

impl<T> ConfigBuilder for Arc<T>
where
    T: ConfigBuilder + ?Sized,
{
    fn build_config(
        &self,
        jdbc_url: &str,
        username: &str,
        password: &SecretString,
        min_idle: u32,
    ) -> DataSourceResult<PoolConfiguration> {
        (**self).build_config(jdbc_url, username, password, min_idle)
    }
}

/// Turns a finished [`PoolConfiguration`] into a ready-to-use data source.
pub trait PoolBuilder: Send + Sync {
    /// Handle returned to the caller, who owns its lifecycle from then on.
    type DataSource;

    fn build_pool(&self, config: PoolConfiguration) -> DataSourceResult<Self::DataSource>;
}

impl<T> PoolBuilder for Arc<T>
where
    T: PoolBuilder + ?Sized,
{
    type DataSource = T::DataSource;

    fn build_pool(&self, config: PoolConfiguration) -> DataSourceResult<Self::DataSource> {
        (**self).build_pool(config)
    }
}

/// [`ConfigBuilder`] applying the same [`PoolSettings`] to every connection.
#[derive(Debug, Clone, Default)]
pub struct SharedConfigBuilder {
    settings: PoolSettings,
}

impl SharedConfigBuilder {
    pub fn new(settings: PoolSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &PoolSettings {
        &self.settings
    }
}

impl ConfigBuilder for SharedConfigBuilder {
    fn build_config(
        &self,
        jdbc_url: &str,
        username: &str,
        password: &SecretString,
        min_idle: u32,
    ) -> DataSourceResult<PoolConfiguration> {
        if min_idle > self.settings.max_size {
            warn!(
                min_idle,
                max_size = self.settings.max_size,
                "requested minimum idle connections exceed the pool size, capping"
            );
        }

        let config = PoolConfiguration::from_settings(
            jdbc_url,
            username,
            password.clone(),
            min_idle,
            &self.settings,
        )?;

        debug!(
            jdbc_url,
            username,
            min_idle = config.min_idle(),
            max_size = config.max_size(),
            "built pool configuration"
        );

        Ok(config)
    }
}
