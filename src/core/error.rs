//! Error types for galley operations.

use thiserror::Error;

use crate::core::ingredient::IngredientKind;
use crate::core::order::OrderId;

/// Failure reported by a [`CookClock`](crate::core::CookClock) when a timed
/// wait could not be delivered.
#[derive(Debug, Clone, Error)]
#[error("{reason}")]
pub struct ClockError {
    /// Human-readable failure description.
    pub reason: String,
}

impl ClockError {
    /// Create a clock error from any displayable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors produced when constructing galley components.
#[derive(Debug, Error)]
pub enum GalleyError {
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Failure delivered through an order's completion handler.
///
/// The order still ran to completion: both ingredients reached their terminal
/// state and every station permit was returned before this is reported.
#[derive(Debug, Clone, Error)]
pub enum OrderError {
    /// A cook timer failed to deliver for one of the order's components.
    #[error("cook timer failed for {kind} of order {order_id}: {reason}")]
    Timer {
        /// Identifier of the affected order.
        order_id: OrderId,
        /// Which component's timer failed.
        kind: IngredientKind,
        /// Failure description from the clock.
        reason: String,
    },
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
