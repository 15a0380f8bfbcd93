//! Savings Projection Report
//!
//! Linear month-by-month growth of savings when one budget option's savings
//! amount is set aside every month. No interest or returns are modelled.

use crate::error::{AdvisorError, AdvisorResult};
use crate::export::csv::{amount_field, csv_writer, export_error, finish};
use crate::models::{BudgetOption, Money};
use chrono::{Datelike, Months, NaiveDate};
use std::io::Write;

/// Default projection length
pub const DEFAULT_MONTHS: u32 = 12;

/// Balance at the end of one month
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionPoint {
    /// First day of the month
    pub month: NaiveDate,
    pub contribution: Money,
    pub balance: Money,
}

impl ProjectionPoint {
    /// Month label, e.g. "Jan 2025"
    pub fn label(&self) -> String {
        self.month.format("%b %Y").to_string()
    }
}

/// Savings Projection Report
#[derive(Debug, Clone)]
pub struct SavingsProjectionReport {
    pub option_label: String,
    pub starting_balance: Money,
    pub monthly_savings: Money,
    pub points: Vec<ProjectionPoint>,
}

impl SavingsProjectionReport {
    /// Project `months` months of saving, starting with the month of `start`
    pub fn generate(
        option: &BudgetOption,
        current_savings: Money,
        start: NaiveDate,
        months: u32,
    ) -> Self {
        let first = first_of_month(start);
        let monthly_savings = option.savings;

        let mut balance = current_savings;
        let points = (0..months)
            .map_while(|offset| {
                let month = first.checked_add_months(Months::new(offset))?;
                balance += monthly_savings;
                Some(ProjectionPoint {
                    month,
                    contribution: monthly_savings,
                    balance,
                })
            })
            .collect();

        Self {
            option_label: option.label.clone(),
            starting_balance: current_savings,
            monthly_savings,
            points,
        }
    }

    /// Balance after the last projected month
    pub fn final_balance(&self) -> Money {
        self.points
            .last()
            .map(|p| p.balance)
            .unwrap_or(self.starting_balance)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Savings Projection ({})\n", self.option_label));
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!("Starting Balance: {}\n", self.starting_balance));
        output.push_str(&format!("Monthly Savings: {}\n\n", self.monthly_savings));

        output.push_str(&format!("{:<12} {:>16} {:>16}\n", "Month", "Contribution", "Balance"));
        output.push_str(&"-".repeat(50));
        output.push('\n');
        for point in &self.points {
            output.push_str(&format!(
                "{:<12} {:>16} {:>16}\n",
                point.label(),
                point.contribution,
                point.balance
            ));
        }
        output.push_str(&"-".repeat(50));
        output.push('\n');
        output.push_str(&format!("Final Balance: {}\n", self.final_balance()));

        output
    }

    /// Export the projection to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> AdvisorResult<()> {
        let mut wtr = csv_writer(writer);
        wtr.write_record(["Month", "Contribution", "Balance"])
            .map_err(export_error)?;

        for point in &self.points {
            wtr.write_record([
                point.label(),
                amount_field(point.contribution),
                amount_field(point.balance),
            ])
            .map_err(export_error)?;
        }

        finish(wtr)
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Parse a `YYYY-MM` start month
pub fn parse_start_month(s: &str) -> AdvisorResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").map_err(|_| {
        AdvisorError::Validation(format!("Invalid month '{}': expected YYYY-MM", s))
    })
}
