//! Rule-based recommendations
//!
//! Rules run in a fixed order over the adjusted catalog and the generated
//! options. Each rule that holds appends one message.

use crate::models::{BudgetOptions, Catalog, ItemKind, LineItem, Money, Priority, Recommendation, Severity};

/// Feasible savings below this share of the goal trigger a warning
pub const SAVINGS_GOAL_TOLERANCE: f64 = 0.8;

/// Discretionary spending above this share of income triggers a warning
pub const DISCRETIONARY_ALERT_SHARE: f64 = 0.15;

/// How many of the largest groceries and bills are named
pub const TOP_ITEMS: usize = 3;

/// Everything the rules look at
#[derive(Debug, Clone, Copy)]
pub struct RecommendationContext<'a> {
    pub catalog: &'a Catalog,
    pub options: &'a BudgetOptions,
    pub monthly_income: Money,
    pub savings_goal: Money,
    pub currency: &'a str,
}

/// Run every rule and collect the messages that apply
pub fn generate_recommendations(ctx: &RecommendationContext<'_>) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    let code = ctx.currency;

    let total_expenses = ctx.catalog.total();
    if total_expenses > ctx.monthly_income {
        recommendations.push(Recommendation::new(
            Severity::Critical,
            format!(
                "Your expenses exceed income by {}! The system has automatically adjusted \
                 your spending. Consider permanent reductions in discretionary items.",
                (total_expenses - ctx.monthly_income).format_with_code(code)
            ),
        ));
    }

    let feasible_savings = ctx.options.feasible_savings();
    if feasible_savings < ctx.savings_goal.scale(SAVINGS_GOAL_TOLERANCE) {
        recommendations.push(Recommendation::new(
            Severity::High,
            format!(
                "Your savings goal may be too ambitious. Current feasible savings: {} vs goal: {}. \
                 Consider adjusting your savings target or reducing expenses.",
                feasible_savings.format_with_code(code),
                ctx.savings_goal.format_with_code(code)
            ),
        ));
    }

    let top_groceries = ctx.catalog.largest(ItemKind::Grocery, TOP_ITEMS);
    if !top_groceries.is_empty() {
        recommendations.push(Recommendation::new(
            Severity::Medium,
            format!(
                "Highest grocery costs: {}. Consider cheaper alternatives or reducing quantities.",
                name_amounts(&top_groceries, code)
            ),
        ));
    }

    let top_bills = ctx.catalog.largest(ItemKind::Bill, TOP_ITEMS);
    if !top_bills.is_empty() {
        recommendations.push(Recommendation::new(
            Severity::Medium,
            format!(
                "Highest bills: {}. Review for potential savings.",
                name_amounts(&top_bills, code)
            ),
        ));
    }

    let discretionary = ctx
        .catalog
        .total_where(|i| i.priority() == Priority::Discretionary);
    if discretionary > ctx.monthly_income.scale(DISCRETIONARY_ALERT_SHARE) {
        let share = match discretionary.percent_of(ctx.monthly_income) {
            Some(pct) => format!(" ({:.0}% of income)", pct),
            None => String::new(),
        };
        recommendations.push(Recommendation::new(
            Severity::High,
            format!(
                "High discretionary spending: {}{}. Consider reducing non-essential expenses.",
                discretionary.format_with_code(code),
                share
            ),
        ));
    }

    let investments: Vec<&str> = ctx
        .catalog
        .iter()
        .filter(|i| i.is_investment())
        .map(LineItem::description)
        .collect();
    if !investments.is_empty() {
        recommendations.push(Recommendation::new(
            Severity::Medium,
            format!(
                "Investment expenses coming up: {}. Plan accordingly to avoid cash flow issues.",
                investments.join(", ")
            ),
        ));
    }

    recommendations
}

fn name_amounts(items: &[&LineItem], code: &str) -> String {
    items
        .iter()
        .map(|i| format!("{} ({})", i.description(), i.amount().format_with_code(code)))
        .collect::<Vec<_>>()
        .join(", ")
}
