//! Galley facade: submission entry point, order identity, and the in-flight
//! order board.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::GalleyConfig;
use crate::core::ingredient::CookClock;
use crate::core::order::{Order, OrderHandler, OrderId};
use crate::core::pantry::Pantry;
use crate::core::station_pool::StationPool;

/// Abstraction for spawning cook tasks on a runtime.
pub trait Spawn {
    /// Spawn an async task.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// Registry of in-flight orders.
///
/// Holds the authoritative strong reference to each order between submission
/// and handler return. Cook tasks carry their own clones, so retiring an
/// entry never tears an order down mid-join; it only ends the board's
/// interest in it.
pub struct OrderBoard {
    orders: Mutex<HashMap<OrderId, Arc<Order>>>,
}

impl OrderBoard {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            orders: Mutex::new(HashMap::new()),
        })
    }

    pub(crate) fn post(&self, order: Arc<Order>) {
        self.orders.lock().insert(order.id(), order);
    }

    pub(crate) fn retire(&self, id: OrderId) {
        self.orders.lock().remove(&id);
    }

    /// Number of orders currently in flight.
    pub fn len(&self) -> usize {
        self.orders.lock().len()
    }

    /// Whether no orders are in flight.
    pub fn is_empty(&self) -> bool {
        self.orders.lock().is_empty()
    }
}

/// Kitchen-order coordinator.
///
/// Accepts submissions from arbitrary threads, draws fresh ingredients,
/// allocates monotonic order ids, and launches each order's two cook tasks
/// against the shared station pool. All dependencies are injected at
/// construction; nothing here is process-global.
pub struct Galley<S> {
    stations: Arc<StationPool>,
    pantry: Pantry,
    clock: Arc<dyn CookClock>,
    spawner: S,
    board: Arc<OrderBoard>,
    next_order_id: AtomicU64,
}

impl<S> std::fmt::Debug for Galley<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Galley")
            .field("in_flight", &self.board.len())
            .finish_non_exhaustive()
    }
}

impl<S: Spawn> Galley<S> {
    /// Create a galley with explicit dependencies.
    ///
    /// The configuration is taken as given; use
    /// [`build_galley`](crate::builders::build_galley) to validate first.
    pub fn new(config: &GalleyConfig, spawner: S, clock: Arc<dyn CookClock>) -> Self {
        Self {
            stations: StationPool::new(config.station_capacity),
            pantry: Pantry::new(config.protein_cook(), config.starch_cook()),
            clock,
            spawner,
            board: OrderBoard::new(),
            next_order_id: AtomicU64::new(0),
        }
    }

    /// Submit an order.
    ///
    /// Callable concurrently from any thread; returns immediately. The
    /// handler is invoked later, exactly once, on an arbitrary worker thread,
    /// when both of the order's components have cooked.
    pub fn submit(&self, handler: OrderHandler) {
        let id = self.next_order_id.fetch_add(1, Ordering::Relaxed);
        let protein = self.pantry.draw_protein();
        let starch = self.pantry.draw_starch();
        tracing::debug!(order_id = id, "order submitted");

        let order = Order::new(id, protein, starch, handler);
        self.board.post(Arc::clone(&order));
        order.start(&self.stations, &self.clock, &self.spawner, &self.board);
    }

    /// Station pool shared by all orders.
    pub const fn stations(&self) -> &Arc<StationPool> {
        &self.stations
    }

    /// Pantry all orders draw from.
    pub const fn pantry(&self) -> &Pantry {
        &self.pantry
    }

    /// Number of orders currently in flight.
    pub fn in_flight(&self) -> usize {
        self.board.len()
    }
}
