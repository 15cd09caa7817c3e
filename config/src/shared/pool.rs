use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::shared::ValidationError;

const DEFAULT_MAX_SIZE: u32 = 10;
const DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_IDLE_TIMEOUT_MS: u64 = 600_000;
const DEFAULT_MAX_LIFETIME_MS: u64 = 1_800_000;

/// Pool-wide settings applied by the shared configuration builder to every data source,
/// whatever the database vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct PoolSettings {
    /// Maximum number of connections the pool keeps open.
    pub max_size: u32,
    /// How long a checkout waits for a connection before failing.
    pub connection_timeout_ms: u64,
    /// Idle connections above the minimum are closed after this long. `None` keeps them.
    pub idle_timeout_ms: Option<u64>,
    /// Connections are recycled after this long. `None` keeps them forever.
    pub max_lifetime_ms: Option<u64>,
    /// Whether a connection is pinged before it is handed out.
    pub test_on_check_out: bool,
    /// Whether pool construction blocks until the minimum idle connections are open.
    ///
    /// When `false` connections are opened in the background and connection failures
    /// only show up on the first checkout.
    pub eager_initialization: bool,
}

impl PoolSettings {
    /// Validates the [`PoolSettings`].
    ///
    /// Rejects a zero pool size and zero durations. Optional durations may be `None` but
    /// never `Some(0)`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_size == 0 {
            return Err(ValidationError::MaxPoolSizeZero);
        }

        if self.connection_timeout_ms == 0 {
            return Err(ValidationError::ConnectionTimeoutZero);
        }

        if self.idle_timeout_ms == Some(0) {
            return Err(ValidationError::IdleTimeoutZero);
        }

        if self.max_lifetime_ms == Some(0) {
            return Err(ValidationError::MaxLifetimeZero);
        }

        Ok(())
    }

    pub fn connection_timeout(&self) -> Duration {
        Duration::from_millis(self.connection_timeout_ms)
    }

    pub fn idle_timeout(&self) -> Option<Duration> {
        self.idle_timeout_ms.map(Duration::from_millis)
    }

    pub fn max_lifetime(&self) -> Option<Duration> {
        self.max_lifetime_ms.map(Duration::from_millis)
    }
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            connection_timeout_ms: DEFAULT_CONNECTION_TIMEOUT_MS,
            idle_timeout_ms: Some(DEFAULT_IDLE_TIMEOUT_MS),
            max_lifetime_ms: Some(DEFAULT_MAX_LIFETIME_MS),
            test_on_check_out: true,
            eager_initialization: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = PoolSettings::default();

        assert_eq!(settings.validate(), Ok(()));
        assert_eq!(settings.connection_timeout(), Duration::from_secs(30));
        assert_eq!(settings.idle_timeout(), Some(Duration::from_secs(600)));
        assert_eq!(settings.max_lifetime(), Some(Duration::from_secs(1800)));
    }

    #[test]
    fn zero_max_size_is_rejected() {
        let settings = PoolSettings {
            max_size: 0,
            ..Default::default()
        };

        assert_eq!(settings.validate(), Err(ValidationError::MaxPoolSizeZero));
    }

    #[test]
    fn zero_connection_timeout_is_rejected() {
        let settings = PoolSettings {
            connection_timeout_ms: 0,
            ..Default::default()
        };

        assert_eq!(
            settings.validate(),
            Err(ValidationError::ConnectionTimeoutZero)
        );
    }

    #[test]
    fn zero_idle_timeout_is_rejected() {
        let settings = PoolSettings {
            idle_timeout_ms: Some(0),
            ..Default::default()
        };

        assert_eq!(settings.validate(), Err(ValidationError::IdleTimeoutZero));
    }

    #[test]
    fn zero_max_lifetime_is_rejected() {
        let settings = PoolSettings {
            max_lifetime_ms: Some(0),
            ..Default::default()
        };

        assert_eq!(settings.validate(), Err(ValidationError::MaxLifetimeZero));
    }

    #[test]
    fn unset_optional_durations_are_valid() {
        let settings = PoolSettings {
            idle_timeout_ms: None,
            max_lifetime_ms: None,
            ..Default::default()
        };

        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: PoolSettings =
            serde_json::from_str(r#"{ "max_size": 4, "idle_timeout_ms": null }"#).unwrap();

        assert_eq!(settings.max_size, 4);
        assert_eq!(settings.idle_timeout(), None);
        assert_eq!(settings.max_lifetime_ms, Some(DEFAULT_MAX_LIFETIME_MS));
        assert!(settings.eager_initialization);
    }
}
