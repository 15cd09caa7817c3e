//! Oracle data sources backed by [`r2d2`] and the `oracle` driver.

mod factory;
mod manager;
mod pool;
mod session;
mod url;
mod verify;

pub use factory::{
    ORACLE_MIN_IDLE, ORACLE_SCRIPT_INIT_SQL, OracleDataSourceFactory, create_data_source,
};
pub use manager::OracleConnectionManager;
pub use pool::{OracleDataSource, OraclePoolBuilder, OraclePooledConnection};
pub use session::SessionInitializer;
pub use url::jdbc_url_to_connect_string;
pub use verify::{ConnectionVerification, verify_connection};
