//! Line item model
//!
//! A line item is one grocery or bill entry. Its `original_amount` is fixed
//! when the catalog is loaded; only `amount` moves, and only downward.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::priority::{Flexibility, ItemKind, Priority};

/// Weeks counted per month when normalizing weekly purchases
pub const WEEKS_PER_MONTH: i64 = 4;

/// Months in one school term
pub const MONTHS_IN_TERM: i64 = 3;

/// How often a template price is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Weekly,
    #[default]
    Monthly,
    PerTerm,
}

impl Frequency {
    /// Convert a price paid at this frequency to a monthly amount
    pub fn to_monthly(&self, price: Money) -> Money {
        match self {
            Self::Weekly => Money::from_cents(price.cents().saturating_mul(WEEKS_PER_MONTH)),
            Self::Monthly => price,
            Self::PerTerm => price.scale(1.0 / MONTHS_IN_TERM as f64),
        }
    }
}

impl std::str::FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "" | "monthly" => Ok(Self::Monthly),
            "per-term" | "per_term" | "term" | "termly" => Ok(Self::PerTerm),
            other => Err(format!("Unknown frequency: '{}'", other)),
        }
    }
}

/// Price of a template entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPrice", into = "RawPrice")]
pub enum Price {
    /// A fixed amount per frequency period
    Fixed(Money),
    /// A percentage of monthly income (0-100)
    ShareOfIncome(f64),
}

impl Price {
    /// Resolve to a concrete amount for a given monthly income
    pub fn resolve(&self, monthly_income: Money) -> Money {
        match self {
            Self::Fixed(amount) => *amount,
            Self::ShareOfIncome(pct) => monthly_income.scale(pct / 100.0),
        }
    }

    /// Parse "13500", "1,250.50" or "10%"
    pub fn parse(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if let Some(pct) = trimmed.strip_suffix('%') {
            let pct: f64 = pct
                .trim()
                .parse()
                .map_err(|_| format!("Invalid percentage: '{}'", s))?;
            Ok(Self::ShareOfIncome(pct))
        } else {
            Money::parse(trimmed)
                .map(Self::Fixed)
                .map_err(|e| e.to_string())
        }
    }
}

/// Wire form of [`Price`]: a number of whole units or a string
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Units(f64),
    Text(String),
}

impl TryFrom<RawPrice> for Price {
    type Error = String;

    fn try_from(raw: RawPrice) -> Result<Self, Self::Error> {
        match raw {
            RawPrice::Units(units) => Ok(Self::Fixed(Money::from_units_f64(units))),
            RawPrice::Text(text) => Self::parse(&text),
        }
    }
}

impl From<Price> for RawPrice {
    fn from(price: Price) -> Self {
        match price {
            Price::Fixed(amount) => RawPrice::Units(amount.as_units_f64()),
            Price::ShareOfIncome(pct) => RawPrice::Text(format!("{}%", pct)),
        }
    }
}

/// Catalog source entry, before normalization to a monthly amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemTemplate {
    pub description: String,

    #[serde(default)]
    pub quantity: String,

    pub kind: ItemKind,

    pub price: Price,

    #[serde(default)]
    pub frequency: Frequency,

    pub priority: Priority,

    #[serde(default)]
    pub flexibility: Flexibility,

    #[serde(default)]
    pub category: String,
}

impl LineItemTemplate {
    /// Create a monthly fixed-price template
    pub fn new(
        description: impl Into<String>,
        kind: ItemKind,
        price: Money,
        priority: Priority,
        flexibility: Flexibility,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            quantity: String::new(),
            kind,
            price: Price::Fixed(price),
            frequency: Frequency::Monthly,
            priority,
            flexibility,
            category: category.into(),
        }
    }

    /// Set the quantity label
    pub fn quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = quantity.into();
        self
    }

    /// Set the payment frequency
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Replace the price
    pub fn price(mut self, price: Price) -> Self {
        self.price = price;
        self
    }

    /// Monthly amount for a given income
    pub fn monthly_amount(&self, monthly_income: Money) -> Money {
        self.frequency.to_monthly(self.price.resolve(monthly_income))
    }

    /// Validate the template
    pub fn validate(&self) -> Result<(), LineItemValidationError> {
        if self.description.trim().is_empty() {
            return Err(LineItemValidationError::EmptyDescription);
        }

        match self.price {
            Price::Fixed(amount) if amount.is_negative() => {
                Err(LineItemValidationError::NegativePrice)
            }
            Price::Fixed(amount) if amount > Money::MAX => {
                Err(LineItemValidationError::PriceTooLarge)
            }
            Price::ShareOfIncome(pct) if !(0.0..=100.0).contains(&pct) => {
                Err(LineItemValidationError::ShareOutOfRange(pct))
            }
            _ => Ok(()),
        }
    }
}

/// A grocery or bill entry in a working catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    description: String,
    quantity: String,
    kind: ItemKind,
    amount: Money,
    original_amount: Money,
    priority: Priority,
    flexibility: Flexibility,
    category: String,
}

impl LineItem {
    /// Create a line item whose original amount is `amount`
    ///
    /// Negative amounts are floored at zero.
    pub fn new(
        description: impl Into<String>,
        kind: ItemKind,
        amount: Money,
        priority: Priority,
        flexibility: Flexibility,
        category: impl Into<String>,
    ) -> Self {
        let amount = if amount.is_negative() {
            Money::zero()
        } else {
            amount
        };
        Self {
            description: description.into(),
            quantity: String::new(),
            kind,
            amount,
            original_amount: amount,
            priority,
            flexibility,
            category: category.into(),
        }
    }

    /// Shorthand for a grocery item
    pub fn grocery(
        description: impl Into<String>,
        amount: Money,
        priority: Priority,
        flexibility: Flexibility,
        category: impl Into<String>,
    ) -> Self {
        Self::new(description, ItemKind::Grocery, amount, priority, flexibility, category)
    }

    /// Shorthand for a bill
    pub fn bill(
        description: impl Into<String>,
        amount: Money,
        priority: Priority,
        flexibility: Flexibility,
        category: impl Into<String>,
    ) -> Self {
        Self::new(description, ItemKind::Bill, amount, priority, flexibility, category)
    }

    /// Materialize a template for a given monthly income
    pub fn from_template(template: &LineItemTemplate, monthly_income: Money) -> Self {
        let mut item = Self::new(
            template.description.clone(),
            template.kind,
            template.monthly_amount(monthly_income),
            template.priority,
            template.flexibility,
            template.category.clone(),
        );
        item.quantity = template.quantity.clone();
        item
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Current (possibly reduced) monthly amount
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Amount at catalog load, before any cut or adjustment
    pub fn original_amount(&self) -> Money {
        self.original_amount
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn flexibility(&self) -> Flexibility {
        self.flexibility
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_grocery(&self) -> bool {
        self.kind == ItemKind::Grocery
    }

    pub fn is_bill(&self) -> bool {
        self.kind == ItemKind::Bill
    }

    /// Items whose category is "Investment" or "Investments" (any case)
    ///
    /// Priority is not consulted: an `Investment`-priority item filed under
    /// another category does not count.
    pub fn is_investment(&self) -> bool {
        self.category.eq_ignore_ascii_case("investment")
            || self.category.eq_ignore_ascii_case("investments")
    }

    /// Reset the amount to `original_amount` less `cut_pct` percent
    ///
    /// Always computed from the original, so repeated calls with the same
    /// percentage give the same amount. `cut_pct` is clamped to `[0, 100]`.
    pub fn apply_cut(&mut self, cut_pct: f64) {
        let pct = cut_pct.clamp(0.0, 100.0);
        self.amount = self.original_amount.scale(1.0 - pct / 100.0);
    }

    /// Multiply the current amount by `factor` (clamped to `[0, 1]`),
    /// truncating to the hundredth below
    ///
    /// Truncation keeps a proportional shrink from overshooting its target
    /// total through rounding.
    pub fn scale_amount(&mut self, factor: f64) {
        let factor = factor.clamp(0.0, 1.0);
        self.amount = self.amount.scale_truncated(factor).min(self.amount);
    }

    /// Change from the original amount (negative for a reduction)
    pub fn adjustment(&self) -> Money {
        self.amount - self.original_amount
    }

    /// Percentage change from the original amount
    ///
    /// `None` when the original amount is zero.
    pub fn percent_change(&self) -> Option<f64> {
        self.adjustment().percent_of(self.original_amount)
    }

    /// Whether the amount differs from the original
    pub fn is_adjusted(&self) -> bool {
        self.amount != self.original_amount
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.amount)
    }
}

/// Validation errors for catalog entries
#[derive(Debug, Clone, PartialEq)]
pub enum LineItemValidationError {
    EmptyDescription,
    NegativePrice,
    PriceTooLarge,
    ShareOutOfRange(f64),
}

impl fmt::Display for LineItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NegativePrice => write!(f, "Price cannot be negative"),
            Self::PriceTooLarge => write!(f, "Price cannot exceed {}", Money::MAX),
            Self::ShareOutOfRange(pct) => {
                write!(f, "Income share must be between 0% and 100% (got {}%)", pct)
            }
        }
    }
}

impl std::error::Error for LineItemValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn bread() -> LineItemTemplate {
        LineItemTemplate::new(
            "Bread",
            ItemKind::Grocery,
            Money::from_units(6_000),
            Priority::Essential,
            Flexibility::Medium,
            "Food Staples",
        )
        .quantity("1 big")
        .frequency(Frequency::Weekly)
    }

    #[test]
    fn test_frequency_normalization() {
        let price = Money::from_units(700_000);
        assert_eq!(Frequency::Monthly.to_monthly(price), price);
        assert_eq!(Frequency::Weekly.to_monthly(price), Money::from_units(2_800_000));
        assert_eq!(Frequency::PerTerm.to_monthly(price).cents(), 23_333_333);
    }

    #[test]
    fn test_share_of_income_price() {
        let tithe = Price::ShareOfIncome(10.0);
        assert_eq!(
            tithe.resolve(Money::from_units(5_000_000)),
            Money::from_units(500_000)
        );
    }

    #[test]
    fn test_price_parse() {
        assert_eq!(Price::parse("10%"), Ok(Price::ShareOfIncome(10.0)));
        assert_eq!(
            Price::parse("13,500"),
            Ok(Price::Fixed(Money::from_units(13_500)))
        );
        assert!(Price::parse("ten").is_err());
    }

    #[test]
    fn test_template_from_yaml() {
        let yaml = r#"
description: Tithe
kind: bill
price: "10%"
priority: Essential
flexibility: Medium
category: Donations
"#;
        let template: LineItemTemplate = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(template.price, Price::ShareOfIncome(10.0));
        assert_eq!(template.frequency, Frequency::Monthly);

        let yaml = r#"
description: Laundry
kind: bill
price: 12000
frequency: weekly
priority: Essential
flexibility: High
"#;
        let template: LineItemTemplate = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            template.monthly_amount(Money::zero()),
            Money::from_units(48_000)
        );
    }

    #[test]
    fn test_from_template() {
        let item = LineItem::from_template(&bread(), Money::from_units(5_000_000));
        assert_eq!(item.amount(), Money::from_units(24_000));
        assert_eq!(item.original_amount(), Money::from_units(24_000));
        assert_eq!(item.quantity(), "1 big");
        assert!(item.is_grocery());
        assert!(!item.is_adjusted());
    }

    #[test]
    fn test_template_validation() {
        let mut template = bread();
        assert!(template.validate().is_ok());

        template.description = "  ".into();
        assert_eq!(
            template.validate(),
            Err(LineItemValidationError::EmptyDescription)
        );

        let template = bread().price(Price::Fixed(Money::from_units(-1)));
        assert_eq!(template.validate(), Err(LineItemValidationError::NegativePrice));

        let template = bread().price(Price::ShareOfIncome(150.0));
        assert!(matches!(
            template.validate(),
            Err(LineItemValidationError::ShareOutOfRange(_))
        ));

        let template = bread().price(Price::Fixed(Money::from_units_f64(1e20)));
        assert_eq!(template.validate(), Err(LineItemValidationError::PriceTooLarge));
    }

    #[test]
    fn test_weekly_conversion_saturates() {
        let huge = Money::from_cents(i64::MAX / 2);
        assert_eq!(
            Frequency::Weekly.to_monthly(huge),
            Money::from_cents(i64::MAX)
        );
    }

    #[test]
    fn test_apply_cut_recomputes_from_original() {
        let mut item = LineItem::bill(
            "Fuel",
            Money::from_units(200_000),
            Priority::Essential,
            Flexibility::Medium,
            "Transport",
        );
        item.apply_cut(10.0);
        assert_eq!(item.amount(), Money::from_units(180_000));
        item.apply_cut(10.0);
        assert_eq!(item.amount(), Money::from_units(180_000));
        item.apply_cut(0.0);
        assert_eq!(item.amount(), item.original_amount());
    }

    #[test]
    fn test_scale_amount_compounds_and_never_grows() {
        let mut item = LineItem::grocery(
            "Drinks",
            Money::from_units(20_000),
            Priority::Discretionary,
            Flexibility::High,
            "Beverages",
        );
        item.scale_amount(0.5);
        assert_eq!(item.amount(), Money::from_units(10_000));
        item.scale_amount(0.5);
        assert_eq!(item.amount(), Money::from_units(5_000));
        item.scale_amount(3.0);
        assert_eq!(item.amount(), Money::from_units(5_000));
        assert_eq!(item.original_amount(), Money::from_units(20_000));
        assert_eq!(item.adjustment(), Money::from_units(-15_000));
        assert_eq!(item.percent_change(), Some(-75.0));
    }

    #[test]
    fn test_negative_amount_floored() {
        let item = LineItem::bill(
            "Refund",
            Money::from_units(-10),
            Priority::Critical,
            Flexibility::None,
            "",
        );
        assert!(item.amount().is_zero());
        assert_eq!(item.percent_change(), None);
    }

    #[test]
    fn test_is_investment() {
        let pigs = LineItem::bill(
            "Pig farming",
            Money::from_units(250_000),
            Priority::Investment,
            Flexibility::High,
            "Investments",
        );
        assert!(pigs.is_investment());

        let shares = LineItem::bill(
            "Shares",
            Money::from_units(1),
            Priority::Discretionary,
            Flexibility::High,
            "Investment",
        );
        assert!(shares.is_investment());

        let goats = LineItem::bill(
            "Goats",
            Money::from_units(80_000),
            Priority::Investment,
            Flexibility::High,
            "Livestock",
        );
        assert!(!goats.is_investment());
    }
}
