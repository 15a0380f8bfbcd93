//! Budget allocation options
//!
//! What to do with the money left after fixed expenses: a savings /
//! investments / discretionary split chosen from the user's risk tier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use super::priority::ParseTagError;

/// Risk appetite used to pick allocation splits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskTier {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// The two allocation splits offered at this tier
    ///
    /// Savings share falls and investment share rises with risk; the
    /// discretionary share stays at 10%.
    pub fn splits(&self) -> [AllocationSplit; 2] {
        match self {
            Self::Low => [
                AllocationSplit::new("Conservative", 70, 20, 10),
                AllocationSplit::new("Moderate Conservative", 60, 30, 10),
            ],
            Self::Medium => [
                AllocationSplit::new("Balanced", 50, 40, 10),
                AllocationSplit::new("Growth Focus", 40, 50, 10),
            ],
            Self::High => [
                AllocationSplit::new("Aggressive", 30, 60, 10),
                AllocationSplit::new("Very Aggressive", 20, 70, 10),
            ],
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for RiskTier {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseTagError::new("risk tier", s)),
        }
    }
}

/// Percentage split of the remaining income
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationSplit {
    pub label: &'static str,
    pub savings_pct: u8,
    pub investment_pct: u8,
    pub discretionary_pct: u8,
}

impl AllocationSplit {
    pub const fn new(
        label: &'static str,
        savings_pct: u8,
        investment_pct: u8,
        discretionary_pct: u8,
    ) -> Self {
        Self {
            label,
            savings_pct,
            investment_pct,
            discretionary_pct,
        }
    }

    /// e.g. "Balanced: 50% savings, 40% investments, 10% discretionary"
    pub fn describe(&self) -> String {
        format!(
            "{}: {}% savings, {}% investments, {}% discretionary",
            self.label, self.savings_pct, self.investment_pct, self.discretionary_pct
        )
    }
}

/// One way of allocating the remaining income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetOption {
    /// "Option 1" or "Option 2"
    pub label: String,
    pub savings: Money,
    pub investments: Money,
    pub discretionary: Money,
    pub description: String,
    pub feasible: bool,
}

impl BudgetOption {
    /// An all-zero option used when nothing is left after fixed expenses
    pub fn infeasible(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            savings: Money::zero(),
            investments: Money::zero(),
            discretionary: Money::zero(),
            description: description.into(),
            feasible: false,
        }
    }

    /// Savings + investments + discretionary
    pub fn total_allocated(&self) -> Money {
        self.savings + self.investments + self.discretionary
    }

    /// Money left unassigned by this option
    pub fn unallocated(&self, remaining: Money) -> Money {
        remaining - self.total_allocated()
    }
}

/// The pair of options offered for a risk tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetOptions {
    pub first: BudgetOption,
    pub second: BudgetOption,
}

impl BudgetOptions {
    pub fn new(first: BudgetOption, second: BudgetOption) -> Self {
        Self { first, second }
    }

    /// Both options in order
    pub fn iter(&self) -> impl Iterator<Item = &BudgetOption> {
        [&self.first, &self.second].into_iter()
    }

    /// Option by 1-based number
    pub fn get(&self, number: usize) -> Option<&BudgetOption> {
        match number {
            1 => Some(&self.first),
            2 => Some(&self.second),
            _ => None,
        }
    }

    /// The smaller of the two options' savings
    pub fn feasible_savings(&self) -> Money {
        self.first.savings.min(self.second.savings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_sum_to_100() {
        for tier in [RiskTier::Low, RiskTier::Medium, RiskTier::High] {
            for split in tier.splits() {
                assert_eq!(
                    split.savings_pct + split.investment_pct + split.discretionary_pct,
                    100
                );
            }
        }
    }

    #[test]
    fn test_savings_share_falls_with_risk() {
        let low = RiskTier::Low.splits()[0].savings_pct;
        let medium = RiskTier::Medium.splits()[0].savings_pct;
        let high = RiskTier::High.splits()[0].savings_pct;
        assert!(low > medium && medium > high);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            RiskTier::Medium.splits()[1].describe(),
            "Growth Focus: 40% savings, 50% investments, 10% discretionary"
        );
    }

    #[test]
    fn test_risk_tier_parse_and_serde() {
        assert_eq!("HIGH".parse::<RiskTier>(), Ok(RiskTier::High));
        assert!("extreme".parse::<RiskTier>().is_err());
        assert_eq!(serde_json::to_string(&RiskTier::Low).unwrap(), "\"low\"");
    }

    #[test]
    fn test_feasible_savings_and_totals() {
        let mut first = BudgetOption::infeasible("Option 1", "x");
        first.savings = Money::from_units(300);
        first.investments = Money::from_units(100);
        let mut second = BudgetOption::infeasible("Option 2", "y");
        second.savings = Money::from_units(200);

        let options = BudgetOptions::new(first, second);
        assert_eq!(options.feasible_savings(), Money::from_units(200));
        assert_eq!(options.first.total_allocated(), Money::from_units(400));
        assert_eq!(
            options.first.unallocated(Money::from_units(1000)),
            Money::from_units(600)
        );
        assert_eq!(options.get(2).map(|o| o.label.as_str()), Some("Option 2"));
        assert!(options.get(3).is_none());
        assert_eq!(options.iter().count(), 2);
    }
}
