//! Service layer for the budget advisor
//!
//! The calculation engine: totals, spending cuts, automatic adjustment,
//! budget options and recommendations, tied together by `pipeline`.

pub mod auto_adjust;
pub mod budget_options;
pub mod pipeline;
pub mod recommendations;
pub mod spending_cuts;
pub mod totals;

pub use auto_adjust::{AdjustmentOutcome, AdjustmentStep, AutoAdjuster, ESSENTIAL_CUT_CAP};
pub use budget_options::generate_options;
pub use pipeline::{run_plan, PlanInputs, PlanOutcome};
pub use recommendations::{generate_recommendations, RecommendationContext};
pub use spending_cuts::SpendingCuts;
pub use totals::Totals;
