use std::sync::{Arc, Mutex};

use secrecy::SecretString;

use crate::error::DataSourceResult;
use crate::pool::{ConfigBuilder, PoolBuilder, PoolConfiguration, SharedConfigBuilder};

/// Arguments of one [`ConfigBuilder::build_config`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRequest {
    pub jdbc_url: String,
    pub username: String,
    pub min_idle: u32,
}

/// [`ConfigBuilder`] wrapper recording every request before delegating.
#[derive(Debug, Clone)]
pub struct RecordingConfigBuilder<C = SharedConfigBuilder> {
    wrapped: C,
    requests: Arc<Mutex<Vec<ConfigRequest>>>,
}

impl<C> RecordingConfigBuilder<C> {
    pub fn wrap(wrapped: C) -> Self {
        Self {
            wrapped,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<ConfigRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for RecordingConfigBuilder {
    fn default() -> Self {
        Self::wrap(SharedConfigBuilder::default())
    }
}

impl<C> ConfigBuilder for RecordingConfigBuilder<C>
where
    C: ConfigBuilder,
{
    fn build_config(
        &self,
        jdbc_url: &str,
        username: &str,
        password: &SecretString,
        min_idle: u32,
    ) -> DataSourceResult<PoolConfiguration> {
        self.requests.lock().unwrap().push(ConfigRequest {
            jdbc_url: jdbc_url.to_string(),
            username: username.to_string(),
            min_idle,
        });

        self.wrapped.build_config(jdbc_url, username, password, min_idle)
    }
}

/// Data source handed out by [`RecordingPoolBuilder`].
#[derive(Debug, Clone)]
pub struct RecordedDataSource {
    /// Position of the build call that produced this handle, starting at zero.
    pub id: usize,
    pub config: PoolConfiguration,
}

/// [`PoolBuilder`] that keeps every configuration it receives instead of connecting.
#[derive(Debug, Clone, Default)]
pub struct RecordingPoolBuilder {
    configs: Arc<Mutex<Vec<PoolConfiguration>>>,
}

impl RecordingPoolBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configs(&self) -> Vec<PoolConfiguration> {
        self.configs.lock().unwrap().clone()
    }

    pub fn build_count(&self) -> usize {
        self.configs.lock().unwrap().len()
    }
}

impl PoolBuilder for RecordingPoolBuilder {
    type DataSource = RecordedDataSource;

    fn build_pool(&self, config: PoolConfiguration) -> DataSourceResult<RecordedDataSource> {
        let mut configs = self.configs.lock().unwrap();
        let id = configs.len();
        configs.push(config.clone());

        Ok(RecordedDataSource { id, config })
    }
}
