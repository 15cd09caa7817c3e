use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A pool must be allowed at least one connection.
    #[error("`max_size` cannot be zero")]
    MaxPoolSizeZero,
    /// Checkout needs a positive timeout to wait for a connection.
    #[error("`connection_timeout_ms` cannot be zero")]
    ConnectionTimeoutZero,
    /// An idle timeout, when set, must be positive. Use `None` to keep idle connections.
    #[error("`idle_timeout_ms` cannot be zero")]
    IdleTimeoutZero,
    /// A max lifetime, when set, must be positive. Use `None` to never recycle connections.
    #[error("`max_lifetime_ms` cannot be zero")]
    MaxLifetimeZero,
}
