//! The planning pipeline
//!
//! Cuts, adjustment, aggregation, options and recommendations run in a fixed
//! order over a fresh working copy of the catalog. Nothing is cached between
//! runs, so identical inputs give identical outcomes.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AdvisorError, AdvisorResult};
use crate::models::{BudgetOptions, Catalog, Money, Recommendation, RiskTier};

use super::auto_adjust::{AdjustmentOutcome, AutoAdjuster};
use super::budget_options::generate_options;
use super::recommendations::{generate_recommendations, RecommendationContext};
use super::spending_cuts::SpendingCuts;
use super::totals::Totals;

/// Everything a plan run needs besides the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanInputs {
    pub monthly_income: Money,
    pub savings_goal: Money,
    /// Starting balance for savings projections
    pub current_savings: Money,
    pub risk_tier: RiskTier,
    pub cuts: SpendingCuts,
    /// Currency code used in messages
    pub currency: String,
}

impl Default for PlanInputs {
    fn default() -> Self {
        Self {
            monthly_income: Money::from_units(5_000_000),
            savings_goal: Money::from_units(500_000),
            current_savings: Money::zero(),
            risk_tier: RiskTier::Medium,
            cuts: SpendingCuts::none(),
            currency: "UGX".to_string(),
        }
    }
}

impl PlanInputs {
    /// Check the ranges `run_plan` assumes
    pub fn validate(&self) -> AdvisorResult<()> {
        if self.monthly_income.is_negative() {
            return Err(AdvisorError::Validation(
                "Monthly income cannot be negative".into(),
            ));
        }
        if self.savings_goal.is_negative() {
            return Err(AdvisorError::Validation(
                "Savings goal cannot be negative".into(),
            ));
        }
        if self.current_savings.is_negative() {
            return Err(AdvisorError::Validation(
                "Current savings cannot be negative".into(),
            ));
        }
        for (name, amount) in [
            ("Monthly income", self.monthly_income),
            ("Savings goal", self.savings_goal),
            ("Current savings", self.current_savings),
        ] {
            if amount > Money::MAX {
                return Err(AdvisorError::Validation(format!(
                    "{} cannot exceed {}",
                    name,
                    Money::MAX
                )));
            }
        }
        check_pct("Essential cut", self.cuts.essential_pct)?;
        check_pct("Discretionary cut", self.cuts.discretionary_pct)?;
        Ok(())
    }
}

fn check_pct(name: &str, pct: f64) -> AdvisorResult<()> {
    if pct.is_finite() && (0.0..=100.0).contains(&pct) {
        Ok(())
    } else {
        Err(AdvisorError::Validation(format!(
            "{} must be between 0 and 100, got {}",
            name, pct
        )))
    }
}

/// Everything a plan run produces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanOutcome {
    /// Working catalog after cuts and adjustment
    pub adjusted_catalog: Catalog,
    /// Totals after cuts, before automatic adjustment
    pub pre_adjustment_totals: Totals,
    pub totals: Totals,
    pub budget_options: BudgetOptions,
    pub recommendations: Vec<Recommendation>,
    pub adjustment_log: Vec<String>,
    pub adjustment: AdjustmentOutcome,
    pub residual_overspend: Money,
}

/// Run the full pipeline over a copy of `catalog`
///
/// Expects inputs that pass [`PlanInputs::validate`]; out-of-range cut
/// percentages are clamped rather than rejected here.
pub fn run_plan(inputs: &PlanInputs, catalog: &Catalog) -> PlanOutcome {
    let mut working = catalog.clone();
    inputs.cuts.apply(&mut working);

    let pre_adjustment_totals = Totals::compute(&working, inputs.monthly_income);
    let adjustment = AutoAdjuster::new().adjust(&mut working, inputs.monthly_income);
    let totals = Totals::compute(&working, inputs.monthly_income);

    let budget_options = generate_options(
        inputs.monthly_income,
        totals.total_fixed_expenses,
        inputs.savings_goal,
        inputs.risk_tier,
    );

    let recommendations = generate_recommendations(&RecommendationContext {
        catalog: &working,
        options: &budget_options,
        monthly_income: inputs.monthly_income,
        savings_goal: inputs.savings_goal,
        currency: &inputs.currency,
    });

    info!(
        items = working.len(),
        fixed_expenses = %totals.total_fixed_expenses,
        disposable = %totals.disposable_income,
        adjustments = adjustment.steps.len(),
        recommendations = recommendations.len(),
        "plan complete"
    );

    PlanOutcome {
        adjustment_log: adjustment.log(&inputs.currency),
        residual_overspend: adjustment.residual_overspend,
        adjusted_catalog: working,
        pre_adjustment_totals,
        totals,
        budget_options,
        recommendations,
        adjustment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::models::{Flexibility, LineItem, Priority, Severity};

    fn units(n: i64) -> Money {
        Money::from_units(n)
    }

    #[test]
    fn test_default_plan() {
        let inputs = PlanInputs::default();
        let catalog = default_catalog(inputs.monthly_income);
        let outcome = run_plan(&inputs, &catalog);

        assert_eq!(outcome.totals.total_fixed_expenses, units(2_458_500));
        assert_eq!(outcome.totals.disposable_income, units(2_541_500));
        assert!(outcome.adjustment_log.is_empty());
        assert!(outcome.residual_overspend.is_zero());
        assert_eq!(outcome.pre_adjustment_totals, outcome.totals);
        assert!(outcome.budget_options.iter().all(|o| o.feasible));
        // source catalog untouched
        assert_eq!(catalog, default_catalog(inputs.monthly_income));
    }

    #[test]
    fn test_plan_is_deterministic() {
        let inputs = PlanInputs {
            monthly_income: units(1_500_000),
            cuts: SpendingCuts::new(5.0, 25.0),
            ..PlanInputs::default()
        };
        let catalog = default_catalog(units(5_000_000));
        assert_eq!(run_plan(&inputs, &catalog), run_plan(&inputs, &catalog));
    }

    #[test]
    fn test_overspend_is_adjusted() {
        let inputs = PlanInputs {
            monthly_income: units(1_000_000),
            savings_goal: units(0),
            ..PlanInputs::default()
        };
        let catalog = Catalog::new(vec![
            LineItem::bill("Outings", units(200_000), Priority::Discretionary, Flexibility::High, "Fun"),
            LineItem::bill("Fuel", units(900_000), Priority::Essential, Flexibility::Medium, "Transport"),
        ]);

        let outcome = run_plan(&inputs, &catalog);

        assert_eq!(outcome.pre_adjustment_totals.disposable_income, units(-100_000));
        assert!(outcome.totals.disposable_income.is_zero());
        assert_eq!(
            outcome.adjustment_log,
            vec!["Reduced discretionary spending by 50%".to_string()]
        );
        assert!(outcome.budget_options.iter().all(|o| !o.feasible));
        assert!(outcome
            .recommendations
            .iter()
            .all(|r| r.severity != Severity::Critical));
    }

    #[test]
    fn test_cuts_apply_before_adjustment() {
        let inputs = PlanInputs {
            monthly_income: units(1_000),
            savings_goal: units(0),
            cuts: SpendingCuts::new(0.0, 50.0),
            ..PlanInputs::default()
        };
        let catalog = Catalog::new(vec![
            LineItem::bill("Rent", units(800), Priority::Critical, Flexibility::None, "Housing"),
            LineItem::bill("Outings", units(400), Priority::Discretionary, Flexibility::High, "Fun"),
        ]);

        let outcome = run_plan(&inputs, &catalog);

        assert!(outcome.adjustment.steps.is_empty());
        assert_eq!(outcome.totals.total_fixed_expenses, units(1_000));
    }

    #[test]
    fn test_validate() {
        assert!(PlanInputs::default().validate().is_ok());

        let negative = PlanInputs {
            monthly_income: units(-1),
            ..PlanInputs::default()
        };
        assert!(negative.validate().unwrap_err().is_validation());

        let bad_cut = PlanInputs {
            cuts: SpendingCuts::new(0.0, 120.0),
            ..PlanInputs::default()
        };
        assert!(bad_cut.validate().is_err());

        let nan_cut = PlanInputs {
            cuts: SpendingCuts::new(f64::NAN, 0.0),
            ..PlanInputs::default()
        };
        assert!(nan_cut.validate().is_err());

        let huge_goal = PlanInputs {
            savings_goal: Money::from_cents(i64::MAX),
            ..PlanInputs::default()
        };
        let err = huge_goal.validate().unwrap_err();
        assert!(err.to_string().contains("Savings goal cannot exceed"));

        let at_limit = PlanInputs {
            monthly_income: Money::MAX,
            ..PlanInputs::default()
        };
        assert!(at_limit.validate().is_ok());
    }
}
