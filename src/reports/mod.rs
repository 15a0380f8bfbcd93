//! Reports module for the budget advisor
//!
//! Provides the adjustment summary, expense breakdown and savings projection
//! reports. Each renders for the terminal and exports to CSV.

pub mod adjustment_summary;
pub mod expense_breakdown;
pub mod savings_projection;

pub use adjustment_summary::{AdjustedItemRow, AdjustmentFilter, AdjustmentSummaryReport, PriorityAdjustment};
pub use expense_breakdown::{BreakdownFilter, CategorySpending, ExpenseBreakdownReport, ExpenseRow, PrioritySpending};
pub use savings_projection::{parse_start_month, ProjectionPoint, SavingsProjectionReport};
