//! Configuration for pooled database data sources.
//!
//! Connection descriptors and pool settings are plain serde types under [`shared`].
//! [`load_config`] assembles them from layered configuration files and `APP_`-prefixed
//! environment variables.

mod environment;
mod load;
pub mod shared;

pub use environment::Environment;
pub use load::{Config, LoadConfigError, load_config, load_config_from};
