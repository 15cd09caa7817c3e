use serde::Deserialize;

use crate::Config;
use crate::shared::{OracleConnectionConfig, PoolSettings, ValidationError};

/// Top-level configuration for a pooled Oracle data source.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DataSourceConfig {
    pub connection: OracleConnectionConfig,
    #[serde(default)]
    pub pool: PoolSettings,
}

impl DataSourceConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.pool.validate()
    }
}

impl Config for DataSourceConfig {
    const LIST_PARSE_KEYS: &'static [&'static str] = &[];
}
