//! Order join coordination: two cook tasks racing to a single completion.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::error::OrderError;
use crate::core::galley::{OrderBoard, Spawn};
use crate::core::ingredient::{CookClock, CookOutcome, Ingredient, IngredientKind};
use crate::core::station_pool::StationPool;

/// Monotonic identifier for a submitted order.
pub type OrderId = u64;

/// A finished order: both components cooked.
#[derive(Debug, Clone)]
pub struct PreparedMeal {
    /// Identifier the order was submitted under.
    pub order_id: OrderId,
    /// The cooked protein component.
    pub protein: Arc<Ingredient>,
    /// The cooked starch component.
    pub starch: Arc<Ingredient>,
}

/// Completion callback invoked exactly once per order, on an arbitrary
/// worker thread.
pub type OrderHandler = Box<dyn FnOnce(Result<PreparedMeal, OrderError>) + Send + 'static>;

/// Externally observable order lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderPhase {
    /// Built, cook tasks not yet launched.
    Created,
    /// Cook tasks launched, completion pending.
    InProgress,
    /// Handler has been taken for invocation.
    Completed,
}

/// Join bookkeeping guarded by the per-order lock. The lock is held only for
/// the brief both-done check, never across a suspension point or the handler.
struct JoinState {
    protein_done: bool,
    starch_done: bool,
    first_error: Option<OrderError>,
    handler: Option<OrderHandler>,
}

/// One in-flight order: a protein and a starch ingredient cooked
/// concurrently, joined by a single completion handler.
///
/// The two cook tasks may finish in either order, or simultaneously on
/// different worker threads; whichever task observes "both done" first
/// delivers the order. Taking the handler out of the join state under the
/// lock makes a second delivery impossible.
pub struct Order {
    id: OrderId,
    protein: Arc<Ingredient>,
    starch: Arc<Ingredient>,
    started: AtomicBool,
    join: Mutex<JoinState>,
}

impl Order {
    pub(crate) fn new(
        id: OrderId,
        protein: Arc<Ingredient>,
        starch: Arc<Ingredient>,
        handler: OrderHandler,
    ) -> Arc<Self> {
        Arc::new(Self {
            id,
            protein,
            starch,
            started: AtomicBool::new(false),
            join: Mutex::new(JoinState {
                protein_done: false,
                starch_done: false,
                first_error: None,
                handler: Some(handler),
            }),
        })
    }

    /// Identifier of this order.
    pub const fn id(&self) -> OrderId {
        self.id
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> OrderPhase {
        if self.join.lock().handler.is_none() {
            OrderPhase::Completed
        } else if self.started.load(Ordering::Acquire) {
            OrderPhase::InProgress
        } else {
            OrderPhase::Created
        }
    }

    /// Launch both cook tasks. Both station acquisitions are issued before
    /// either cook timer can have fired, so the two cook phases genuinely
    /// overlap.
    pub(crate) fn start<S: Spawn>(
        self: Arc<Self>,
        pool: &Arc<StationPool>,
        clock: &Arc<dyn CookClock>,
        spawner: &S,
        board: &Arc<OrderBoard>,
    ) {
        self.started.store(true, Ordering::Release);
        for kind in [IngredientKind::Protein, IngredientKind::Starch] {
            let order = Arc::clone(&self);
            let pool = Arc::clone(pool);
            let clock = Arc::clone(clock);
            let board = Arc::clone(board);
            spawner.spawn(async move {
                let outcome = order.ingredient(kind).cook(&pool, clock.as_ref()).await;
                if order.note_finished(kind, outcome) {
                    board.retire(order.id());
                }
            });
        }
    }

    pub(crate) fn ingredient(&self, kind: IngredientKind) -> &Arc<Ingredient> {
        match kind {
            IngredientKind::Protein => &self.protein,
            IngredientKind::Starch => &self.starch,
        }
    }

    /// Record one component finishing and run the join check.
    ///
    /// Returns `true` when this call delivered the order. The handler is
    /// invoked outside the join lock; the `take()` under the lock is the
    /// at-most-once guard.
    pub(crate) fn note_finished(&self, kind: IngredientKind, outcome: CookOutcome) -> bool {
        if matches!(outcome, CookOutcome::AlreadyStarted) {
            // A rejected duplicate start carries no completion to join on.
            return false;
        }

        let ready = {
            let mut join = self.join.lock();
            match kind {
                IngredientKind::Protein => join.protein_done = true,
                IngredientKind::Starch => join.starch_done = true,
            }
            if let CookOutcome::TimerFailed(err) = outcome {
                if join.first_error.is_none() {
                    join.first_error = Some(OrderError::Timer {
                        order_id: self.id,
                        kind,
                        reason: err.reason,
                    });
                }
            }
            if join.protein_done && join.starch_done {
                let error = join.first_error.take();
                join.handler.take().map(|handler| (handler, error))
            } else {
                None
            }
        };

        match ready {
            Some((handler, None)) => {
                tracing::info!(order_id = self.id, "order ready");
                handler(Ok(PreparedMeal {
                    order_id: self.id,
                    protein: Arc::clone(&self.protein),
                    starch: Arc::clone(&self.starch),
                }));
                true
            }
            Some((handler, Some(error))) => {
                tracing::warn!(order_id = self.id, error = %error, "order completed with cook failure");
                handler(Err(error));
                true
            }
            None => false,
        }
    }
}
