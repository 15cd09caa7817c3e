mod base;
mod connection;
mod datasource;
mod pool;

pub use base::ValidationError;
pub use connection::{OracleConnectionConfig, OracleConnectionConfigWithoutSecrets};
pub use datasource::DataSourceConfig;
pub use pool::PoolSettings;
