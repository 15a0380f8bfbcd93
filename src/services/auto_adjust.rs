//! Automatic spending adjustment
//!
//! When a catalog costs more than the monthly income, the overspend is closed
//! in two proportional passes over the working catalog:
//!
//! 1. Discretionary and Nice-to-have items shrink by `overspend / total` of
//!    their bucket. If that ratio reaches 1 the pass is skipped outright
//!    rather than zeroing the whole bucket.
//! 2. Essential items with Medium or High flexibility shrink by the same kind
//!    of ratio, capped at [`ESSENTIAL_CUT_CAP`].
//!
//! Each pass scales the amounts left by the previous one. Whatever cannot be
//! closed is reported as a residual shortfall, not an error.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{Catalog, LineItem, Money, Priority};

/// Largest fraction the flexible-essentials pass may remove
pub const ESSENTIAL_CUT_CAP: f64 = 0.5;

/// One recorded adjustment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum AdjustmentStep {
    /// Discretionary and Nice-to-have items were scaled down
    ReducedDiscretionary { reduction_pct: f64, reduced_by: Money },
    /// Flexible essential items were scaled down
    ReducedFlexibleEssentials { reduction_pct: f64, reduced_by: Money },
    /// Expenses still exceed income after both passes
    Unbalanced { shortfall: Money },
}

impl AdjustmentStep {
    /// Human-readable log line
    pub fn describe(&self, currency: &str) -> String {
        match self {
            Self::ReducedDiscretionary { reduction_pct, .. } => {
                format!("Reduced discretionary spending by {:.0}%", reduction_pct)
            }
            Self::ReducedFlexibleEssentials { reduction_pct, .. } => {
                format!(
                    "Reduced flexible essential spending by {:.0}%",
                    reduction_pct
                )
            }
            Self::Unbalanced { shortfall } => format!(
                "Unable to fully balance budget. Still overspending by {}. Consider increasing income.",
                shortfall.format_with_code(currency)
            ),
        }
    }
}

/// Result of an adjustment run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdjustmentOutcome {
    /// Steps in the order they were taken; empty if nothing was needed
    pub steps: Vec<AdjustmentStep>,
    /// Overspend found on entry
    pub initial_overspend: Money,
    /// Overspend left after both passes (zero when balanced)
    pub residual_overspend: Money,
}

impl AdjustmentOutcome {
    /// Whether the catalog was over income on entry
    pub fn was_needed(&self) -> bool {
        self.initial_overspend.is_positive()
    }

    pub fn is_balanced(&self) -> bool {
        !self.residual_overspend.is_positive()
    }

    /// The adjustment log as display lines
    pub fn log(&self, currency: &str) -> Vec<String> {
        self.steps.iter().map(|s| s.describe(currency)).collect()
    }
}

/// Two-phase proportional reducer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoAdjuster {
    essential_cap: f64,
}

impl Default for AutoAdjuster {
    fn default() -> Self {
        Self {
            essential_cap: ESSENTIAL_CUT_CAP,
        }
    }
}

fn is_optional(item: &LineItem) -> bool {
    item.priority().is_optional_spending()
}

fn is_flexible_essential(item: &LineItem) -> bool {
    item.priority() == Priority::Essential && item.flexibility().is_adjustable()
}

impl AutoAdjuster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the flexible-essentials cap (clamped to `[0, 1]`)
    pub fn with_essential_cap(mut self, cap: f64) -> Self {
        self.essential_cap = cap.clamp(0.0, 1.0);
        self
    }

    /// Bring a working catalog back within `monthly_income` where possible
    ///
    /// Leaves the catalog untouched and returns an empty outcome when expenses
    /// already fit. Only current amounts are scaled; originals never change.
    pub fn adjust(&self, catalog: &mut Catalog, monthly_income: Money) -> AdjustmentOutcome {
        let total = catalog.total();
        if total <= monthly_income {
            return AdjustmentOutcome::default();
        }

        let initial_overspend = total - monthly_income;
        warn!(
            overspend = %initial_overspend,
            "expenses exceed income; applying automatic adjustments"
        );

        let mut steps = Vec::new();
        let mut overspend = initial_overspend;

        // Phase 1: discretionary and nice-to-have spending
        let optional_total = catalog.total_where(is_optional);
        if optional_total.is_positive() {
            let reduction = overspend.ratio(optional_total).unwrap_or(1.0).min(1.0);
            if reduction < 1.0 {
                let before = catalog.total();
                catalog.scale_where(is_optional, 1.0 - reduction);
                let after = catalog.total();
                overspend = after - monthly_income;

                debug!(
                    reduction,
                    reduced_by = %(before - after),
                    "phase 1: scaled discretionary items"
                );
                steps.push(AdjustmentStep::ReducedDiscretionary {
                    reduction_pct: reduction * 100.0,
                    reduced_by: before - after,
                });
            } else {
                debug!(
                    optional_total = %optional_total,
                    "phase 1 skipped: overspend covers the whole discretionary bucket"
                );
            }
        }

        // Phase 2: essentials that can flex
        if overspend.is_positive() {
            let flexible_total = catalog.total_where(is_flexible_essential);
            if flexible_total.is_positive() {
                let reduction = overspend
                    .ratio(flexible_total)
                    .unwrap_or(0.0)
                    .min(self.essential_cap);
                if reduction > 0.0 {
                    let before = catalog.total();
                    catalog.scale_where(is_flexible_essential, 1.0 - reduction);
                    let after = catalog.total();
                    overspend = after - monthly_income;

                    debug!(
                        reduction,
                        reduced_by = %(before - after),
                        "phase 2: scaled flexible essentials"
                    );
                    steps.push(AdjustmentStep::ReducedFlexibleEssentials {
                        reduction_pct: reduction * 100.0,
                        reduced_by: before - after,
                    });
                }
            }
        }

        let residual_overspend = if overspend.is_positive() {
            warn!(shortfall = %overspend, "budget could not be fully balanced");
            steps.push(AdjustmentStep::Unbalanced {
                shortfall: overspend,
            });
            overspend
        } else {
            Money::zero()
        };

        AdjustmentOutcome {
            steps,
            initial_overspend,
            residual_overspend,
        }
    }

    /// Adjust a copy, leaving the input catalog as it was
    pub fn adjusted(&self, catalog: &Catalog, monthly_income: Money) -> (Catalog, AdjustmentOutcome) {
        let mut working = catalog.clone();
        let outcome = self.adjust(&mut working, monthly_income);
        (working, outcome)
    }
}
