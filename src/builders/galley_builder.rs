//! Construct a galley from validated configuration.

use std::sync::Arc;

use crate::config::GalleyConfig;
use crate::core::{CookClock, Galley, GalleyError, Spawn};

/// Build a galley from configuration, a spawner, and a cook clock.
///
/// Validates the configuration before constructing anything, so a zero
/// capacity or zero duration never reaches the running coordinator.
pub fn build_galley<S>(
    cfg: &GalleyConfig,
    spawner: S,
    clock: Arc<dyn CookClock>,
) -> Result<Galley<S>, GalleyError>
where
    S: Spawn,
{
    cfg.validate().map_err(GalleyError::InvalidConfig)?;
    Ok(Galley::new(cfg, spawner, clock))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::TokioClock;

    #[derive(Clone)]
    struct NoopSpawner;

    impl Spawn for NoopSpawner {
        fn spawn<F>(&self, _fut: F)
        where
            F: std::future::Future<Output = ()> + Send + 'static,
        {
        }
    }

    #[test]
    fn builds_from_valid_config() {
        let galley = build_galley(&GalleyConfig::default(), NoopSpawner, Arc::new(TokioClock));
        let galley = galley.unwrap();
        assert_eq!(galley.stations().capacity(), 8);
        assert_eq!(galley.in_flight(), 0);
    }

    #[test]
    fn rejects_invalid_config() {
        let cfg = GalleyConfig {
            station_capacity: 0,
            ..GalleyConfig::default()
        };
        let err = build_galley(&cfg, NoopSpawner, Arc::new(TokioClock)).unwrap_err();
        assert!(matches!(err, GalleyError::InvalidConfig(_)));
    }
}
