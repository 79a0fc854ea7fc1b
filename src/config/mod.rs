//! Configuration models for capacities and cook durations.

pub mod galley;

pub use galley::GalleyConfig;
