use config::shared::ValidationError;
use thiserror::Error;

/// Result type for data source operations.
pub type DataSourceResult<T> = Result<T, DataSourceError>;

/// Errors raised while building or using a pooled data source.
///
/// Each variant carries the collaborator's error untouched; nothing in this crate
/// retries or reinterprets a failure.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// The shared pool settings were rejected by the configuration builder.
    #[error("invalid pool configuration: {0}")]
    InvalidPoolConfig(#[from] ValidationError),

    /// The pool could not be built or could not hand out a connection in time.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// The Oracle driver failed outside of a pool.
    #[error("oracle error: {0}")]
    Oracle(#[from] oracle::Error),
}
