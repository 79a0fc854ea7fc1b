//! # Galley
//!
//! An asynchronous kitchen-order coordinator with bounded cook-station scheduling.
//!
//! This library coordinates orders that each require two independently-prepared
//! components — a protein item and a starch item — cooked concurrently on
//! stations drawn from a strictly limited shared pool. The order's completion
//! handler fires exactly once, precisely when both components have finished.
//!
//! ## Core Problem Solved
//!
//! Two-part orders over a bounded resource have failure modes that simple
//! fan-out/fan-in code gets wrong under load:
//!
//! - **Double Notification**: both cook tasks observe "sibling done" and each
//!   fires the completion handler
//! - **Station Leak**: a cook task that errors on its timer never returns its
//!   station, starving every later order
//! - **Lost Wakeup**: a release races an enqueue and a waiter parks forever
//! - **Unfair Admission**: late arrivals overtake queued orders when the pool
//!   is exhausted
//!
//! ## Key Features
//!
//! - **Bounded Station Pool**: capacity-accounted admission with strict FIFO
//!   grant order when stations are exhausted
//! - **Exactly-Once Join**: a per-order lock guards the two done-flags and the
//!   handler, tolerating completions on different worker threads
//! - **RAII Permits**: a station returns to the pool when its permit drops,
//!   even on the timer-failure path
//! - **Injected Seams**: the executor (`Spawn`) and the cook timer
//!   (`CookClock`) are traits, so tests run with small pools, short durations,
//!   and injected timer failures
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use galley::builders::build_galley;
//! use galley::config::GalleyConfig;
//! use galley::runtime::{TokioClock, TokioSpawner};
//!
//! let galley = build_galley(
//!     &GalleyConfig::default(),
//!     TokioSpawner::new(tokio::runtime::Handle::current()),
//!     Arc::new(TokioClock),
//! )?;
//!
//! galley.submit(Box::new(|result| match result {
//!     Ok(meal) => println!("order {} ready", meal.order_id),
//!     Err(err) => eprintln!("order failed: {err}"),
//! }));
//! ```
//!
//! For complete examples, see:
//! - `tests/order_flow_test.rs` - Full integration tests
//! - `tests/station_pool_test.rs` - Pool fairness and accounting tests

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core coordination: station pool, ingredients, orders, and the galley facade.
pub mod core;
/// Configuration models for capacities and cook durations.
pub mod config;
/// Builders to construct a galley from configuration.
pub mod builders;
/// Runtime adapters: tokio spawner and cook clock.
pub mod runtime;
/// Shared utilities.
pub mod util;
