//! Budget option generation
//!
//! Splits the income left after fixed expenses between savings, investments
//! and discretionary spending, using the two splits of the user's risk tier.

use tracing::debug;

use crate::models::{AllocationSplit, BudgetOption, BudgetOptions, Money, RiskTier};

/// Description used for both options when nothing is left to allocate
pub const NO_SURPLUS: &str = "No surplus after fixed expenses. Need to reduce costs.";

/// Generate the two options for a risk tier
///
/// `savings_goal` caps the savings share; the freed share is left
/// unallocated rather than moved to another bucket. When the three parts
/// add up to more than `remaining` they are shrunk together so they fit.
pub fn generate_options(
    monthly_income: Money,
    total_fixed_expenses: Money,
    savings_goal: Money,
    risk_tier: RiskTier,
) -> BudgetOptions {
    let remaining = monthly_income - total_fixed_expenses;

    if !remaining.is_positive() {
        debug!(remaining = %remaining, "no surplus; both options infeasible");
        return BudgetOptions::new(
            BudgetOption::infeasible("Option 1", NO_SURPLUS),
            BudgetOption::infeasible("Option 2", NO_SURPLUS),
        );
    }

    let [first, second] = risk_tier.splits();
    let options = BudgetOptions::new(
        allocate("Option 1", &first, remaining, savings_goal),
        allocate("Option 2", &second, remaining, savings_goal),
    );

    debug!(
        risk_tier = %risk_tier,
        remaining = %remaining,
        option1_savings = %options.first.savings,
        option2_savings = %options.second.savings,
        "generated budget options"
    );
    options
}

fn share(remaining: Money, pct: u8) -> Money {
    remaining.scale(f64::from(pct) / 100.0)
}

fn allocate(
    label: &str,
    split: &AllocationSplit,
    remaining: Money,
    savings_goal: Money,
) -> BudgetOption {
    let goal = savings_goal.max(Money::zero());
    let mut savings = share(remaining, split.savings_pct).min(goal);
    let mut investments = share(remaining, split.investment_pct);
    let mut discretionary = share(remaining, split.discretionary_pct);

    let total = savings + investments + discretionary;
    if total > remaining {
        if let Some(factor) = remaining.ratio(total) {
            savings = savings.scale_truncated(factor);
            investments = investments.scale_truncated(factor);
            discretionary = discretionary.scale_truncated(factor);
        }
    }

    BudgetOption {
        label: label.to_string(),
        savings,
        investments,
        discretionary,
        description: split.describe(),
        feasible: true,
    }
}
