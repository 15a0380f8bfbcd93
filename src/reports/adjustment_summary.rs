//! Adjustment Summary Report
//!
//! Compares each line item's original amount with its amount after spending
//! cuts and automatic adjustment, grouped by priority.

use crate::display::report::truncate;
use crate::error::AdvisorResult;
use crate::export::csv::{amount_field, csv_writer, export_error, finish};
use crate::models::{Catalog, LineItem, Money, Priority};
use std::io::Write;

/// Totals for one priority
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityAdjustment {
    pub priority: Priority,
    pub original: Money,
    pub adjusted: Money,
    /// Adjusted minus original; negative for a reduction
    pub adjustment: Money,
    /// Mean per-item percentage change
    pub avg_pct_change: f64,
    /// Adjusted amount as a percentage of income
    pub pct_of_income: f64,
    pub item_count: usize,
}

/// One item in the detail listing
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustedItemRow {
    pub description: String,
    pub priority: Priority,
    pub category: String,
    pub original: Money,
    pub adjusted: Money,
    pub adjustment: Money,
    pub pct_change: f64,
}

/// Which items appear in the detail listing
#[derive(Debug, Clone, Default)]
pub struct AdjustmentFilter {
    /// Priorities to include; empty means all
    pub priorities: Vec<Priority>,
    /// Only items whose amount changed
    pub adjusted_only: bool,
}

impl AdjustmentFilter {
    fn matches(&self, item: &LineItem) -> bool {
        (self.priorities.is_empty() || self.priorities.contains(&item.priority()))
            && (!self.adjusted_only || item.is_adjusted())
    }
}

/// Adjustment Summary Report
#[derive(Debug, Clone)]
pub struct AdjustmentSummaryReport {
    pub monthly_income: Money,
    /// Per-priority rows, largest adjusted amount first
    pub priorities: Vec<PriorityAdjustment>,
    pub items: Vec<AdjustedItemRow>,
    pub total_original: Money,
    pub total_adjusted: Money,
    /// Original total minus adjusted total
    pub total_reduction: Money,
    /// Disposable income gained relative to the unadjusted catalog
    pub disposable_increase: Money,
}

impl AdjustmentSummaryReport {
    /// Summarize a working catalog against its original amounts
    pub fn generate(catalog: &Catalog, monthly_income: Money, filter: &AdjustmentFilter) -> Self {
        let mut priorities: Vec<PriorityAdjustment> = catalog
            .grouped_by_priority()
            .into_iter()
            .map(|(priority, items)| {
                let original: Money = items.iter().map(|i| i.original_amount()).sum();
                let adjusted: Money = items.iter().map(|i| i.amount()).sum();
                let changes: Vec<f64> = items.iter().filter_map(|i| i.percent_change()).collect();
                let avg_pct_change = if changes.is_empty() {
                    0.0
                } else {
                    changes.iter().sum::<f64>() / changes.len() as f64
                };

                PriorityAdjustment {
                    priority,
                    original,
                    adjusted,
                    adjustment: adjusted - original,
                    avg_pct_change,
                    pct_of_income: adjusted.percent_of(monthly_income).unwrap_or(0.0),
                    item_count: items.len(),
                }
            })
            .collect();

        // Largest adjusted amount first
        priorities.sort_by(|a, b| b.adjusted.cmp(&a.adjusted));

        let items = catalog
            .iter()
            .filter(|i| filter.matches(i))
            .map(|i| AdjustedItemRow {
                description: i.description().to_string(),
                priority: i.priority(),
                category: i.category().to_string(),
                original: i.original_amount(),
                adjusted: i.amount(),
                adjustment: i.adjustment(),
                pct_change: i.percent_change().unwrap_or(0.0),
            })
            .collect();

        let total_original = catalog.original_total();
        let total_adjusted = catalog.total();
        let total_reduction = total_original - total_adjusted;
        let disposable_increase =
            (monthly_income - total_adjusted) - (monthly_income - total_original);

        Self {
            monthly_income,
            priorities,
            items,
            total_original,
            total_adjusted,
            total_reduction,
            disposable_increase,
        }
    }

    /// Whether any item differs from its original amount
    pub fn has_adjustments(&self) -> bool {
        !self.total_reduction.is_zero()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Adjustment Summary by Priority\n");
        output.push_str(&"=".repeat(90));
        output.push('\n');
        output.push_str(&format!(
            "{:<15} {:>14} {:>14} {:>14} {:>10} {:>10}\n",
            "Priority", "Original", "Adjusted", "Adjustment", "Avg %", "% Income"
        ));
        output.push_str(&"-".repeat(90));
        output.push('\n');

        for row in &self.priorities {
            output.push_str(&format!(
                "{:<15} {:>14} {:>14} {:>14} {:>9.1}% {:>9.1}%\n",
                row.priority, row.original, row.adjusted, row.adjustment, row.avg_pct_change,
                row.pct_of_income
            ));
        }

        output.push_str(&"-".repeat(90));
        output.push('\n');
        output.push_str(&format!(
            "{:<15} {:>14} {:>14} {:>14}\n",
            "TOTAL",
            self.total_original,
            self.total_adjusted,
            self.total_adjusted - self.total_original
        ));
        output.push_str(&format!("\nTotal Reduction: {}\n", self.total_reduction));
        output.push_str(&format!(
            "Increase in Disposable Income: {}\n",
            self.disposable_increase
        ));

        if !self.items.is_empty() {
            output.push_str(&format!(
                "\n{:<28} {:<14} {:>12} {:>12} {:>12} {:>9}\n",
                "Item", "Priority", "Original", "Adjusted", "Change", "%"
            ));
            output.push_str(&"-".repeat(90));
            output.push('\n');
            for item in &self.items {
                output.push_str(&format!(
                    "{:<28} {:<14} {:>12} {:>12} {:>12} {:>8.1}%\n",
                    truncate(&item.description, 28),
                    item.priority,
                    item.original,
                    item.adjusted,
                    item.adjustment,
                    item.pct_change
                ));
            }
        }

        output
    }

    /// Export the detail rows to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> AdvisorResult<()> {
        let mut wtr = csv_writer(writer);
        wtr.write_record([
            "Description",
            "Priority",
            "Category",
            "Original",
            "Adjusted",
            "Adjustment",
            "Percent Change",
        ])
        .map_err(export_error)?;

        for item in &self.items {
            wtr.write_record([
                item.description.clone(),
                item.priority.to_string(),
                item.category.clone(),
                amount_field(item.original),
                amount_field(item.adjusted),
                amount_field(item.adjustment),
                format!("{:.2}", item.pct_change),
            ])
            .map_err(export_error)?;
        }

        wtr.write_record([
            "TOTAL".to_string(),
            String::new(),
            String::new(),
            amount_field(self.total_original),
            amount_field(self.total_adjusted),
            amount_field(self.total_adjusted - self.total_original),
            String::new(),
        ])
        .map_err(export_error)?;

        finish(wtr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Flexibility;
    use crate::services::{AutoAdjuster, SpendingCuts};

    fn units(n: i64) -> Money {
        Money::from_units(n)
    }

    fn adjusted_catalog() -> Catalog {
        let mut catalog = Catalog::new(vec![
            LineItem::bill("Rent", units(600_000), Priority::Critical, Flexibility::None, "Housing"),
            LineItem::bill("Outings", units(200_000), Priority::Discretionary, Flexibility::High, "Fun"),
            LineItem::grocery("Drinks", units(100_000), Priority::Discretionary, Flexibility::High, "Beverages"),
            LineItem::bill("Fuel", units(300_000), Priority::Essential, Flexibility::Medium, "Transport"),
        ]);
        AutoAdjuster::new().adjust(&mut catalog, units(1_050_000));
        catalog
    }

    #[test]
    fn test_priority_rows() {
        let report = AdjustmentSummaryReport::generate(
            &adjusted_catalog(),
            units(1_050_000),
            &AdjustmentFilter::default(),
        );

        let order: Vec<Priority> = report.priorities.iter().map(|r| r.priority).collect();
        assert_eq!(
            order,
            vec![Priority::Critical, Priority::Essential, Priority::Discretionary]
        );

        let discretionary = &report.priorities[2];
        assert_eq!(discretionary.original, units(300_000));
        assert_eq!(discretionary.adjusted, units(150_000));
        assert_eq!(discretionary.adjustment, units(-150_000));
        assert!((discretionary.avg_pct_change + 50.0).abs() < 1e-9);

        assert_eq!(report.total_reduction, units(150_000));
        assert_eq!(report.disposable_increase, units(150_000));
        assert!(report.has_adjustments());
        assert_eq!(report.items.len(), 4);
    }

    #[test]
    fn test_filters() {
        let catalog = adjusted_catalog();
        let filter = AdjustmentFilter {
            priorities: vec![Priority::Discretionary, Priority::Critical],
            adjusted_only: true,
        };
        let report = AdjustmentSummaryReport::generate(&catalog, units(1_050_000), &filter);

        let names: Vec<&str> = report.items.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(names, vec!["Outings", "Drinks"]);
        // priority rows are never filtered
        assert_eq!(report.priorities.len(), 3);
    }

    #[test]
    fn test_unadjusted_catalog() {
        let mut catalog = Catalog::new(vec![LineItem::bill(
            "Rent",
            units(100),
            Priority::Critical,
            Flexibility::None,
            "Housing",
        )]);
        SpendingCuts::none().apply(&mut catalog);
        let report =
            AdjustmentSummaryReport::generate(&catalog, units(1_000), &AdjustmentFilter::default());

        assert!(!report.has_adjustments());
        assert!((report.priorities[0].pct_of_income - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_export_csv() {
        let report = AdjustmentSummaryReport::generate(
            &adjusted_catalog(),
            units(1_050_000),
            &AdjustmentFilter {
                adjusted_only: true,
                ..AdjustmentFilter::default()
            },
        );

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "Description,Priority,Category,Original,Adjusted,Adjustment,Percent Change"
        );
        assert_eq!(
            lines[1],
            "Outings,Discretionary,Fun,200000.00,100000.00,-100000.00,-50.00"
        );
        assert_eq!(lines.last(), Some(&"TOTAL,,,1200000.00,1050000.00,-150000.00,"));
    }

    #[test]
    fn test_format_terminal() {
        let report = AdjustmentSummaryReport::generate(
            &adjusted_catalog(),
            units(1_050_000),
            &AdjustmentFilter::default(),
        );
        let output = report.format_terminal();
        assert!(output.contains("Adjustment Summary by Priority"));
        assert!(output.contains("Total Reduction: 150,000"));
        assert!(output.contains("Outings"));
    }
}
