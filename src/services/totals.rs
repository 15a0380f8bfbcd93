//! Expense totals
//!
//! Sums a catalog into grocery, bill and fixed-expense totals and the
//! disposable income left over. Recompute after every catalog mutation.

use serde::{Deserialize, Serialize};

use crate::models::{Catalog, Money};

/// Totals for a catalog at a given income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub monthly_income: Money,
    pub total_groceries: Money,
    pub total_bills: Money,
    pub total_fixed_expenses: Money,
    /// Income minus fixed expenses; negative when overspending
    pub disposable_income: Money,
}

impl Totals {
    /// Aggregate the current amounts of a catalog
    pub fn compute(catalog: &Catalog, monthly_income: Money) -> Self {
        let total_groceries: Money = catalog.groceries().map(|i| i.amount()).sum();
        let total_bills: Money = catalog.bills().map(|i| i.amount()).sum();
        let total_fixed_expenses = total_groceries + total_bills;

        Self {
            monthly_income,
            total_groceries,
            total_bills,
            total_fixed_expenses,
            disposable_income: monthly_income - total_fixed_expenses,
        }
    }

    /// Amount by which expenses exceed income, or zero
    pub fn overspend(&self) -> Money {
        if self.disposable_income.is_negative() {
            -self.disposable_income
        } else {
            Money::zero()
        }
    }

    pub fn is_overspending(&self) -> bool {
        self.disposable_income.is_negative()
    }

    /// Fixed expenses as a percentage of income
    pub fn expense_ratio_pct(&self) -> Option<f64> {
        self.total_fixed_expenses.percent_of(self.monthly_income)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::models::{Flexibility, LineItem, Priority};

    #[test]
    fn test_fixed_expenses_is_sum_of_parts() {
        let income = Money::from_units(5_000_000);
        let totals = Totals::compute(&default_catalog(income), income);
        assert_eq!(
            totals.total_fixed_expenses,
            totals.total_groceries + totals.total_bills
        );
        assert_eq!(totals.total_fixed_expenses, Money::from_units(2_458_500));
        assert_eq!(totals.disposable_income, Money::from_units(2_541_500));
        assert!(!totals.is_overspending());
        assert!(totals.overspend().is_zero());
    }

    #[test]
    fn test_negative_disposable_income() {
        let catalog = Catalog::new(vec![LineItem::bill(
            "Rent",
            Money::from_units(700),
            Priority::Critical,
            Flexibility::None,
            "Housing",
        )]);
        let totals = Totals::compute(&catalog, Money::from_units(500));
        assert_eq!(totals.disposable_income, Money::from_units(-200));
        assert_eq!(totals.overspend(), Money::from_units(200));
        assert!(totals.is_overspending());
    }

    #[test]
    fn test_empty_catalog_and_zero_income() {
        let totals = Totals::compute(&Catalog::default(), Money::zero());
        assert!(totals.total_fixed_expenses.is_zero());
        assert!(totals.disposable_income.is_zero());
        assert_eq!(totals.expense_ratio_pct(), None);
    }
}
