//! Bounded cook-station pool with FIFO asynchronous acquisition.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;

/// Bookkeeping guarded by the pool mutex. The waiter queue and the in-use
/// count mutate as a single critical section.
struct PoolState {
    in_use: u32,
    waiters: VecDeque<oneshot::Sender<StationPermit>>,
}

/// Bounded set of interchangeable cook stations.
///
/// Acquisition never fails: a free station is reserved synchronously in the
/// calling context, otherwise the caller is queued and granted later, in
/// strict arrival order, by whichever task releases next. Capacity is fixed
/// for the life of the pool.
pub struct StationPool {
    capacity: u32,
    state: Mutex<PoolState>,
}

impl StationPool {
    /// Create a pool with a fixed number of stations.
    pub fn new(capacity: u32) -> Arc<Self> {
        Arc::new(Self {
            capacity,
            state: Mutex::new(PoolState {
                in_use: 0,
                waiters: VecDeque::new(),
            }),
        })
    }

    /// Number of stations in the pool.
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Stations currently granted.
    pub fn in_use(&self) -> u32 {
        self.state.lock().in_use
    }

    /// Acquisition requests currently waiting for a station.
    pub fn queued(&self) -> usize {
        self.state.lock().waiters.len()
    }

    /// Acquire one station, suspending while the pool is exhausted.
    ///
    /// Arrival order is the call order: when the pool is exhausted the waiter
    /// is enqueued before this function returns, not when the returned future
    /// is first polled. Grants are handed out strictly FIFO.
    pub fn acquire(self: Arc<Self>) -> impl Future<Output = StationPermit> {
        let wait = {
            let mut state = self.state.lock();
            if state.in_use < self.capacity {
                state.in_use += 1;
                tracing::trace!(in_use = state.in_use, "station granted immediately");
                None
            } else {
                let (grant, wait) = oneshot::channel();
                state.waiters.push_back(grant);
                tracing::trace!(queued = state.waiters.len(), "stations exhausted; queued");
                Some(wait)
            }
        };
        async move {
            match wait {
                None => StationPermit { pool: Some(self) },
                Some(wait) => match wait.await {
                    Ok(permit) => permit,
                    // The sender sits in the wait queue and `self` keeps the
                    // pool alive, so the channel cannot close before a grant.
                    Err(_) => unreachable!("station grant channel closed while waiting"),
                },
            }
        }
    }
}

/// Handle for one granted station.
///
/// Dropping the permit returns the station: either a direct hand-off to the
/// head of the wait queue, or a free-count decrement when nobody is waiting.
pub struct StationPermit {
    /// `None` once the station has been surrendered or handed off.
    pool: Option<Arc<StationPool>>,
}

impl Drop for StationPermit {
    fn drop(&mut self) {
        let Some(pool) = self.pool.take() else {
            return;
        };
        loop {
            let waiter = {
                let mut state = pool.state.lock();
                match state.waiters.pop_front() {
                    Some(waiter) => waiter,
                    None => {
                        state.in_use -= 1;
                        tracing::trace!(in_use = state.in_use, "station freed");
                        return;
                    }
                }
            };
            match waiter.send(StationPermit {
                pool: Some(Arc::clone(&pool)),
            }) {
                Ok(()) => {
                    tracing::trace!("station handed to queued waiter");
                    return;
                }
                // That waiter is gone; disarm the bounced permit and keep the
                // station in hand for the next one.
                Err(mut unclaimed) => {
                    unclaimed.pool = None;
                }
            }
        }
    }
}
