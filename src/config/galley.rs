//! Galley configuration structures.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Galley configuration: pool capacity and per-kind cook durations.
///
/// Consumed, not owned, by the core; values are fixed once a galley is
/// constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleyConfig {
    /// Number of cook stations shared by all orders.
    pub station_capacity: u32,
    /// Protein cook duration in milliseconds.
    pub protein_cook_ms: u64,
    /// Starch cook duration in milliseconds.
    pub starch_cook_ms: u64,
}

impl Default for GalleyConfig {
    fn default() -> Self {
        Self {
            station_capacity: 8,
            protein_cook_ms: 1500,
            starch_cook_ms: 1000,
        }
    }
}

impl GalleyConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.station_capacity == 0 {
            return Err("station_capacity must be greater than 0".into());
        }
        if self.protein_cook_ms == 0 {
            return Err("protein_cook_ms must be greater than 0".into());
        }
        if self.starch_cook_ms == 0 {
            return Err("starch_cook_ms must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse galley configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Protein cook duration.
    pub const fn protein_cook(&self) -> Duration {
        Duration::from_millis(self.protein_cook_ms)
    }

    /// Starch cook duration.
    pub const fn starch_cook(&self) -> Duration {
        Duration::from_millis(self.starch_cook_ms)
    }
}
