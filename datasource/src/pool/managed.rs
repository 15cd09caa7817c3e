use std::error::Error;

use r2d2::{CustomizeConnection, HandleError, ManageConnection, Pool};
use tracing::warn;

use crate::pool::PoolConfiguration;

/// Boxed per-connection hook for pools managed by `M`.
pub type ConnectionCustomizer<M> = Box<
    dyn CustomizeConnection<<M as ManageConnection>::Connection, <M as ManageConnection>::Error>,
>;

/// Routes errors raised by the pool's background connection attempts to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorHandler;

impl<E> HandleError<E> for TracingErrorHandler
where
    E: Error,
{
    fn handle_error(&self, error: E) {
        warn!(%error, "connection pool failed to open or validate a connection");
    }
}

/// Builds an [`r2d2`] pool for `manager` sized and timed according to `config`.
///
/// With [`PoolConfiguration::eager_initialization`] the call blocks until the minimum
/// idle connections are open and fails once the connection timeout elapses. Otherwise
/// the pool is returned immediately and fills up in the background.
pub fn build_managed_pool<M>(
    manager: M,
    config: &PoolConfiguration,
    customizer: Option<ConnectionCustomizer<M>>,
) -> Result<Pool<M>, r2d2::Error>
where
    M: ManageConnection,
{
    let mut builder = Pool::<M>::builder()
        .max_size(config.max_size())
        .min_idle(Some(config.min_idle()))
        .connection_timeout(config.connection_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .test_on_check_out(config.test_on_check_out())
        .error_handler(Box::new(TracingErrorHandler));

    if let Some(customizer) = customizer {
        builder = builder.connection_customizer(customizer);
    }

    if config.eager_initialization() {
        builder.build(manager)
    } else {
        Ok(builder.build_unchecked(manager))
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use config::shared::PoolSettings;
    use secrecy::SecretString;

    use super::*;

    #[derive(Debug)]
    struct RefusedError;

    impl fmt::Display for RefusedError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("connection refused")
        }
    }

    impl Error for RefusedError {}

    #[derive(Debug, Default)]
    struct CountingManager {
        opened: Arc<AtomicUsize>,
        refuse: bool,
    }

    impl ManageConnection for CountingManager {
        type Connection = usize;
        type Error = RefusedError;

        fn connect(&self) -> Result<usize, RefusedError> {
            if self.refuse {
                return Err(RefusedError);
            }
            Ok(self.opened.fetch_add(1, Ordering::SeqCst))
        }

        fn is_valid(&self, _conn: &mut usize) -> Result<(), RefusedError> {
            Ok(())
        }

        fn has_broken(&self, _conn: &mut usize) -> bool {
            false
        }
    }

    #[derive(Debug, Default)]
    struct CountingCustomizer {
        acquired: Arc<AtomicUsize>,
    }

    impl CustomizeConnection<usize, RefusedError> for CountingCustomizer {
        fn on_acquire(&self, _conn: &mut usize) -> Result<(), RefusedError> {
            self.acquired.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn config(settings: PoolSettings) -> PoolConfiguration {
        let password = SecretString::new("p".to_string());
        PoolConfiguration::from_settings("url", "u", password, 2, &settings).unwrap()
    }

    #[test]
    fn eager_pool_opens_min_idle_connections_through_customizer() {
        let manager = CountingManager::default();
        let opened = manager.opened.clone();
        let customizer = CountingCustomizer::default();
        let acquired = customizer.acquired.clone();

        let pool = build_managed_pool(
            manager,
            &config(PoolSettings {
                max_size: 5,
                ..Default::default()
            }),
            Some(Box::new(customizer)),
        )
        .unwrap();

        assert_eq!(pool.max_size(), 5);
        assert_eq!(pool.min_idle(), Some(2));
        assert!(pool.state().connections >= 2);
        assert!(opened.load(Ordering::SeqCst) >= 2);
        assert_eq!(
            acquired.load(Ordering::SeqCst),
            opened.load(Ordering::SeqCst)
        );
    }

    #[test]
    fn eager_pool_fails_when_connections_are_refused() {
        let manager = CountingManager {
            refuse: true,
            ..Default::default()
        };

        let result = build_managed_pool(
            manager,
            &config(PoolSettings {
                connection_timeout_ms: 200,
                ..Default::default()
            }),
            None,
        );

        assert!(result.is_err());
    }

    #[test]
    fn lazy_pool_is_returned_even_when_connections_are_refused() {
        let manager = CountingManager {
            refuse: true,
            ..Default::default()
        };

        let pool = build_managed_pool(
            manager,
            &config(PoolSettings {
                connection_timeout_ms: 200,
                eager_initialization: false,
                ..Default::default()
            }),
            None,
        )
        .unwrap();

        assert!(pool.try_get().is_none());
    }
}
