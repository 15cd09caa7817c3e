//! Vendor-agnostic pool configuration and construction.

mod builder;
mod configuration;
mod managed;

pub use builder::{ConfigBuilder, PoolBuilder, SharedConfigBuilder};
pub use configuration::PoolConfiguration;
pub use managed::{ConnectionCustomizer, TracingErrorHandler, build_managed_pool};
