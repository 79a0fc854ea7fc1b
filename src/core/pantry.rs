//! Thread-safe source of fresh ingredients.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::core::ingredient::{Ingredient, IngredientKind};

/// Factory producing fresh raw ingredients on demand.
///
/// Safe to share across submitter threads; draws are counted with a lock-free
/// serial so each ingredient can be correlated with its order in logs.
pub struct Pantry {
    protein_cook: Duration,
    starch_cook: Duration,
    serials: AtomicU64,
}

impl Pantry {
    /// Create a pantry with the fixed cook duration for each kind.
    pub const fn new(protein_cook: Duration, starch_cook: Duration) -> Self {
        Self {
            protein_cook,
            starch_cook,
            serials: AtomicU64::new(0),
        }
    }

    /// Draw a fresh raw protein item.
    pub fn draw_protein(&self) -> Arc<Ingredient> {
        self.draw(IngredientKind::Protein, self.protein_cook)
    }

    /// Draw a fresh raw starch item.
    pub fn draw_starch(&self) -> Arc<Ingredient> {
        self.draw(IngredientKind::Starch, self.starch_cook)
    }

    /// Total ingredients drawn so far.
    pub fn drawn(&self) -> u64 {
        self.serials.load(Ordering::Relaxed)
    }

    fn draw(&self, kind: IngredientKind, cook_time: Duration) -> Arc<Ingredient> {
        let serial = self.serials.fetch_add(1, Ordering::Relaxed);
        Arc::new(Ingredient::new(kind, serial, cook_time))
    }
}
