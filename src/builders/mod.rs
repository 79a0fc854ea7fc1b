//! Builders to construct a galley from configuration.

pub mod galley_builder;

pub use galley_builder::build_galley;
