//! Core coordination: station pool, ingredients, orders, and the galley
//! facade.

pub mod error;
pub mod galley;
pub mod ingredient;
pub mod order;
pub mod pantry;
pub mod station_pool;

pub use error::{AppResult, ClockError, GalleyError, OrderError};
pub use galley::{Galley, OrderBoard, Spawn};
pub use ingredient::{CookClock, CookOutcome, CookState, Ingredient, IngredientKind};
pub use order::{Order, OrderHandler, OrderId, OrderPhase, PreparedMeal};
pub use pantry::Pantry;
pub use station_pool::{StationPermit, StationPool};
