//! Pooled data sources for Oracle databases.
//!
//! [`oracle::OracleDataSourceFactory`] asks a [`pool::ConfigBuilder`] for a base pool
//! configuration, applies the Oracle session settings and hands the result to a
//! [`pool::PoolBuilder`]. Both capabilities are injected, so vendor factories compose
//! over one shared configuration builder and tests can substitute recording doubles.

pub mod error;
pub mod oracle;
pub mod pool;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{DataSourceError, DataSourceResult};
