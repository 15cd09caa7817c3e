use std::sync::Arc;

use r2d2::{Pool, PooledConnection, State};
use tracing::info;

use crate::error::DataSourceResult;
use crate::oracle::{OracleConnectionManager, SessionInitializer};
use crate::pool::{ConnectionCustomizer, PoolBuilder, PoolConfiguration, build_managed_pool};

/// Pooled connection checked out from an [`OracleDataSource`].
pub type OraclePooledConnection = PooledConnection<OracleConnectionManager>;

/// Thread-safe handle to a pool of Oracle connections.
///
/// Cloning is cheap and every clone shares the same pool.
#[derive(Debug, Clone)]
pub struct OracleDataSource {
    pool: Pool<OracleConnectionManager>,
    connection_init_sql: Option<Arc<str>>,
}

impl OracleDataSource {
    /// Checks out a connection, waiting up to the configured connection timeout.
    pub fn get(&self) -> DataSourceResult<OraclePooledConnection> {
        Ok(self.pool.get()?)
    }

    /// Checks out an idle connection without waiting.
    pub fn try_get(&self) -> Option<OraclePooledConnection> {
        self.pool.try_get()
    }

    pub fn state(&self) -> State {
        self.pool.state()
    }

    pub fn max_size(&self) -> u32 {
        self.pool.max_size()
    }

    pub fn min_idle(&self) -> Option<u32> {
        self.pool.min_idle()
    }

    /// Statement every new session runs, if any.
    pub fn connection_init_sql(&self) -> Option<&str> {
        self.connection_init_sql.as_deref()
    }
}

/// [`PoolBuilder`] producing [`OracleDataSource`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct OraclePoolBuilder;

impl PoolBuilder for OraclePoolBuilder {
    type DataSource = OracleDataSource;

    fn build_pool(&self, config: PoolConfiguration) -> DataSourceResult<OracleDataSource> {
        let manager = OracleConnectionManager::from_config(&config);
        let customizer = config.connection_init_sql().map(|sql| {
            Box::new(SessionInitializer::new(sql)) as ConnectionCustomizer<OracleConnectionManager>
        });

        info!(
            connect_string = manager.connect_string(),
            username = manager.username(),
            min_idle = config.min_idle(),
            max_size = config.max_size(),
            session_init = customizer.is_some(),
            eager = config.eager_initialization(),
            "creating oracle connection pool"
        );

        let pool = build_managed_pool(manager, &config, customizer)?;

        Ok(OracleDataSource {
            pool,
            connection_init_sql: config.connection_init_sql().map(Arc::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use config::shared::PoolSettings;
    use secrecy::SecretString;

    use super::*;

    fn lazy_config(init_sql: Option<&str>) -> PoolConfiguration {
        let settings = PoolSettings {
            max_size: 3,
            eager_initialization: false,
            ..Default::default()
        };
        let mut config = PoolConfiguration::from_settings(
            "jdbc:oracle:thin:@localhost:1521/FREEPDB1",
            "u",
            SecretString::new("p".to_string()),
            2,
            &settings,
        )
        .unwrap();
        if let Some(sql) = init_sql {
            config.set_connection_init_sql(sql);
        }
        config
    }

    #[test]
    fn lazy_pool_is_returned_without_connecting() {
        let data_source = OraclePoolBuilder
            .build_pool(lazy_config(Some("select 1 from dual")))
            .unwrap();

        assert_eq!(data_source.max_size(), 3);
        assert_eq!(data_source.min_idle(), Some(2));
        assert_eq!(data_source.connection_init_sql(), Some("select 1 from dual"));
    }

    #[test]
    fn pool_without_init_sql_reports_none() {
        let data_source = OraclePoolBuilder.build_pool(lazy_config(None)).unwrap();

        assert_eq!(data_source.connection_init_sql(), None);
    }
}
