use config::shared::{DataSourceConfig, OracleConnectionConfig, PoolSettings};
use secrecy::SecretString;
use tracing::debug;

use crate::error::DataSourceResult;
use crate::oracle::{OracleDataSource, OraclePoolBuilder};
use crate::pool::{ConfigBuilder, PoolBuilder, SharedConfigBuilder};

/// Session statement lifting the `C##` prefix requirement for common users and schemas.
pub const ORACLE_SCRIPT_INIT_SQL: &str = r#"alter session set "_ORACLE_SCRIPT"=true"#;

/// Minimum number of idle connections requested for every Oracle pool.
pub const ORACLE_MIN_IDLE: u32 = 2;

/// Creates pooled Oracle data sources.
///
/// The factory holds no state of its own: every call asks `config_builder` for a fresh
/// configuration and `pool_builder` for a fresh pool, and errors from either are
/// returned as they are.
#[derive(Debug, Clone)]
pub struct OracleDataSourceFactory<C, P> {
    config_builder: C,
    pool_builder: P,
}

impl OracleDataSourceFactory<SharedConfigBuilder, OraclePoolBuilder> {
    /// Factory backed by [`SharedConfigBuilder`] and [`OraclePoolBuilder`].
    pub fn with_settings(settings: PoolSettings) -> Self {
        Self::new(SharedConfigBuilder::new(settings), OraclePoolBuilder)
    }
}

impl<C, P> OracleDataSourceFactory<C, P>
where
    C: ConfigBuilder,
    P: PoolBuilder,
{
    pub fn new(config_builder: C, pool_builder: P) -> Self {
        Self {
            config_builder,
            pool_builder,
        }
    }

    /// Creates a data source for the given connection.
    ///
    /// The base configuration always asks for [`ORACLE_MIN_IDLE`] idle connections. When
    /// `oracle_script_required` is set, every session first runs
    /// [`ORACLE_SCRIPT_INIT_SQL`]; otherwise no initialization statement is configured.
    pub fn create_data_source(
        &self,
        jdbc_url: &str,
        username: &str,
        password: &SecretString,
        oracle_script_required: bool,
    ) -> DataSourceResult<P::DataSource> {
        let mut config = self
            .config_builder
            .build_config(jdbc_url, username, password, ORACLE_MIN_IDLE)?;

        if oracle_script_required {
            config.set_connection_init_sql(ORACLE_SCRIPT_INIT_SQL);
        }

        debug!(jdbc_url, username, oracle_script_required, "creating oracle data source");

        self.pool_builder.build_pool(config)
    }

    /// Creates a data source from a loaded [`OracleConnectionConfig`].
    pub fn create_from_config(
        &self,
        config: &OracleConnectionConfig,
    ) -> DataSourceResult<P::DataSource> {
        self.create_data_source(
            &config.jdbc_url,
            &config.username,
            &config.password,
            config.oracle_script_required,
        )
    }
}

/// Creates an [`OracleDataSource`] from a loaded [`DataSourceConfig`].
pub fn create_data_source(config: &DataSourceConfig) -> DataSourceResult<OracleDataSource> {
    OracleDataSourceFactory::with_settings(config.pool.clone())
        .create_from_config(&config.connection)
}
