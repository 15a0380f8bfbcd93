//! Plan display formatting
//!
//! The default `plan` view: overview figures, the adjustment log, both budget
//! options and the recommendations.

use crate::models::{BudgetOption, Money};
use crate::services::{PlanInputs, PlanOutcome};

use super::report::{format_bar, format_header, format_percentage, separator};

const WIDTH: usize = 64;
const BAR_WIDTH: usize = 20;

/// Format the full plan for terminal display
pub fn format_plan(inputs: &PlanInputs, outcome: &PlanOutcome) -> String {
    let mut output = String::new();
    let code = inputs.currency.as_str();
    let totals = &outcome.totals;

    output.push_str(&format_header("Budget Overview", WIDTH));
    output.push_str(&line("Monthly Income", totals.monthly_income.format_with_code(code)));
    output.push_str(&line("Groceries", totals.total_groceries.format_with_code(code)));
    output.push_str(&line("Bills", totals.total_bills.format_with_code(code)));
    output.push_str(&line(
        "Fixed Expenses",
        totals.total_fixed_expenses.format_with_code(code),
    ));
    if let Some(ratio) = totals.expense_ratio_pct() {
        output.push_str(&line("Expenses / Income", format_percentage(ratio)));
    }
    output.push_str(&line(
        "Disposable Income",
        totals.disposable_income.format_with_code(code),
    ));
    output.push_str(&line(
        "Feasible Savings",
        outcome.budget_options.feasible_savings().format_with_code(code),
    ));
    output.push_str(&line("Savings Goal", inputs.savings_goal.format_with_code(code)));
    output.push_str(&line("Risk Tolerance", inputs.risk_tier.to_string()));

    if !outcome.adjustment_log.is_empty() {
        output.push('\n');
        output.push_str(&format_header("Automatic Adjustments", WIDTH));
        output.push_str(&format!(
            "Expenses exceeded income by {}.\n",
            outcome.adjustment.initial_overspend.format_with_code(code)
        ));
        for entry in &outcome.adjustment_log {
            output.push_str(&format!("  - {}\n", entry));
        }
    }

    output.push('\n');
    output.push_str(&format_header("Budget Options", WIDTH));
    let remaining = totals.disposable_income;
    for option in outcome.budget_options.iter() {
        output.push_str(&format_option(option, remaining, code));
    }

    if !outcome.recommendations.is_empty() {
        output.push('\n');
        output.push_str(&format_header("Recommendations", WIDTH));
        for rec in &outcome.recommendations {
            output.push_str(&format!("[{}] {}\n", rec.severity, rec.message));
        }
    }

    output
}

fn line(label: &str, value: String) -> String {
    format!("{:<22} {:>28}\n", label, value)
}

fn format_option(option: &BudgetOption, remaining: Money, code: &str) -> String {
    let mut output = format!("{}: {}\n", option.label, option.description);
    if !option.feasible {
        return output;
    }

    for (name, amount) in [
        ("Savings", option.savings),
        ("Investments", option.investments),
        ("Discretionary", option.discretionary),
    ] {
        output.push_str(&format!(
            "  {:<14} {:>20} {}\n",
            name,
            amount.format_with_code(code),
            format_bar(amount, remaining, BAR_WIDTH)
        ));
    }

    let unallocated = option.unallocated(remaining);
    if unallocated.is_positive() {
        output.push_str(&format!(
            "  {:<14} {:>20}\n",
            "Unallocated",
            unallocated.format_with_code(code)
        ));
    }
    output.push_str(&format!("  {}\n", separator(WIDTH - 2)));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::services::run_plan;

    #[test]
    fn test_format_default_plan() {
        let inputs = PlanInputs::default();
        let outcome = run_plan(&inputs, &default_catalog(inputs.monthly_income));
        let output = format_plan(&inputs, &outcome);

        assert!(output.contains("Budget Overview"));
        assert!(output.contains("2,458,500 UGX"));
        assert!(output.contains("2,541,500 UGX"));
        assert!(output.contains("Option 1: Balanced: 50% savings, 40% investments, 10% discretionary"));
        assert!(output.contains("Unallocated"));
        assert!(output.contains("[Medium] Highest grocery costs"));
        assert!(!output.contains("Automatic Adjustments"));
    }

    #[test]
    fn test_format_adjusted_plan() {
        let inputs = PlanInputs {
            monthly_income: Money::from_units(1_500_000),
            ..PlanInputs::default()
        };
        let outcome = run_plan(&inputs, &default_catalog(Money::from_units(5_000_000)));
        let output = format_plan(&inputs, &outcome);

        assert!(output.contains("Automatic Adjustments"));
        assert!(output.contains("Expenses exceeded income by 958,500 UGX."));
        assert!(output.contains("Unable to fully balance budget"));
        assert!(output.contains("No surplus after fixed expenses. Need to reduce costs."));
    }
}
