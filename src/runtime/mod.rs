//! Runtime adapters: tokio spawner and cook clock.

pub mod tokio_clock;
pub mod tokio_spawner;

pub use tokio_clock::TokioClock;
pub use tokio_spawner::TokioSpawner;
