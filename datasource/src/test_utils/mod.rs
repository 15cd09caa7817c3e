//! Test doubles for the pool capabilities.
//!
//! [`RecordingConfigBuilder`] and [`RecordingPoolBuilder`] let tests observe exactly what
//! a data source factory asked for and produced without opening database connections.

mod recording;

pub use recording::{
    ConfigRequest, RecordedDataSource, RecordingConfigBuilder, RecordingPoolBuilder,
};
