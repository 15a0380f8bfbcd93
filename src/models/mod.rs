//! Core data models for the budget advisor
//!
//! This module contains the data structures the calculator works on: money,
//! line items and their classification tags, the catalog, budget options and
//! recommendations.

pub mod budget_option;
pub mod catalog;
pub mod line_item;
pub mod money;
pub mod priority;
pub mod recommendation;

pub use budget_option::{AllocationSplit, BudgetOption, BudgetOptions, RiskTier};
pub use catalog::Catalog;
pub use line_item::{Frequency, LineItem, LineItemTemplate, LineItemValidationError, Price};
pub use money::{Money, MoneyParseError};
pub use priority::{Flexibility, ItemKind, ParseTagError, Priority};
pub use recommendation::{Recommendation, Severity};
