//! Ingredient cook-state machine and the cook timer seam.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::core::error::ClockError;
use crate::core::station_pool::StationPool;

/// Which of an order's two components an ingredient is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IngredientKind {
    /// The protein component.
    Protein,
    /// The starch component.
    Starch,
}

impl fmt::Display for IngredientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Protein => write!(f, "protein"),
            Self::Starch => write!(f, "starch"),
        }
    }
}

/// Cook lifecycle of a single ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookState {
    /// Freshly drawn; not yet on a station.
    Raw,
    /// Holding a station permit, waiting out the cook duration.
    Cooking,
    /// Terminal. The station has been returned.
    Cooked,
}

/// How one cook pass ended.
#[derive(Debug, Clone)]
pub enum CookOutcome {
    /// The cook timer elapsed normally.
    Finished,
    /// The clock failed to deliver the timer. The ingredient still reached
    /// [`CookState::Cooked`] and its station was returned; the failure is
    /// carried so the order can surface it.
    TimerFailed(ClockError),
    /// The ingredient had already been started; nothing was done.
    AlreadyStarted,
}

/// Timer seam for the cook duration.
///
/// Production code uses [`TokioClock`](crate::runtime::TokioClock). Tests
/// inject failing implementations to drive the timer-error path.
#[async_trait]
pub trait CookClock: Send + Sync + 'static {
    /// Wait for `duration`, reporting delivery failure instead of panicking.
    async fn wait(&self, duration: Duration) -> Result<(), ClockError>;
}

/// One component of an order, with a fixed cook duration.
///
/// Created [`CookState::Raw`] by the pantry. [`cook`](Self::cook) holds
/// exactly one station permit for the duration of the
/// [`CookState::Cooking`] phase and always reaches the terminal state, even
/// when the clock fails.
#[derive(Debug)]
pub struct Ingredient {
    kind: IngredientKind,
    serial: u64,
    cook_time: Duration,
    started: AtomicBool,
    state: Mutex<CookState>,
}

impl Ingredient {
    pub(crate) fn new(kind: IngredientKind, serial: u64, cook_time: Duration) -> Self {
        Self {
            kind,
            serial,
            cook_time,
            started: AtomicBool::new(false),
            state: Mutex::new(CookState::Raw),
        }
    }

    /// Which component this ingredient is.
    pub const fn kind(&self) -> IngredientKind {
        self.kind
    }

    /// Pantry draw serial, for correlating log lines.
    pub const fn serial(&self) -> u64 {
        self.serial
    }

    /// Fixed cook duration.
    pub const fn cook_time(&self) -> Duration {
        self.cook_time
    }

    /// Current cook state.
    pub fn state(&self) -> CookState {
        *self.state.lock()
    }

    /// Whether the ingredient has reached its terminal state.
    pub fn is_cooked(&self) -> bool {
        self.state() == CookState::Cooked
    }

    /// Run one cook pass: acquire a station, wait out the cook duration,
    /// release the station.
    ///
    /// The terminal transition and the station release happen on every path,
    /// including clock failure; the failure is reported in the returned
    /// [`CookOutcome`] rather than swallowed. A second call is rejected
    /// without touching the pool.
    pub async fn cook(&self, pool: &Arc<StationPool>, clock: &dyn CookClock) -> CookOutcome {
        if self.started.swap(true, Ordering::AcqRel) {
            tracing::warn!(
                kind = %self.kind,
                serial = self.serial,
                "ingredient already started; ignoring"
            );
            return CookOutcome::AlreadyStarted;
        }

        let permit = Arc::clone(pool).acquire().await;
        self.set_state(CookState::Cooking);
        tracing::debug!(kind = %self.kind, serial = self.serial, "cooking");

        let waited = clock.wait(self.cook_time).await;

        // Terminal transition and release happen regardless of how the timer
        // ended; an ingredient must never hold a station past this point.
        self.mark_cooked();
        drop(permit);

        match waited {
            Ok(()) => {
                tracing::debug!(kind = %self.kind, serial = self.serial, "cooked");
                CookOutcome::Finished
            }
            Err(err) => {
                tracing::warn!(
                    kind = %self.kind,
                    serial = self.serial,
                    error = %err,
                    "cook timer failed; marking cooked anyway"
                );
                CookOutcome::TimerFailed(err)
            }
        }
    }

    fn set_state(&self, next: CookState) {
        *self.state.lock() = next;
    }

    /// Idempotent terminal transition: a duplicate firing is ignored.
    fn mark_cooked(&self) {
        let mut state = self.state.lock();
        if *state == CookState::Cooked {
            tracing::warn!(
                kind = %self.kind,
                serial = self.serial,
                "duplicate terminal transition ignored"
            );
            return;
        }
        *state = CookState::Cooked;
    }
}
