//! User-requested spending cuts
//!
//! Essential-bucket items (Critical, Essential) and discretionary-bucket items
//! (Discretionary, Nice-to-have, Investment) are each reset to their original
//! amount less a percentage. Recomputing from the original makes re-applying
//! the same cuts a no-op.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Catalog;

/// Percentage cuts for the two spending buckets
///
/// Both percentages are expected in `[0, 100]`; values outside are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpendingCuts {
    pub essential_pct: f64,
    pub discretionary_pct: f64,
}

impl SpendingCuts {
    pub fn new(essential_pct: f64, discretionary_pct: f64) -> Self {
        Self {
            essential_pct,
            discretionary_pct,
        }
    }

    /// No cut in either bucket
    pub fn none() -> Self {
        Self::default()
    }

    /// Apply the cuts to a working catalog in place
    pub fn apply(&self, catalog: &mut Catalog) {
        let essential = catalog.apply_cut_where(
            |i| i.priority().is_essential_bucket(),
            self.essential_pct,
        );
        let discretionary = catalog.apply_cut_where(
            |i| i.priority().is_discretionary_bucket(),
            self.discretionary_pct,
        );

        debug!(
            essential_pct = self.essential_pct,
            discretionary_pct = self.discretionary_pct,
            essential_items = essential,
            discretionary_items = discretionary,
            "applied spending cuts"
        );
    }
}
