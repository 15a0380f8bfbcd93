//! Expense Breakdown Report
//!
//! Where the money goes: spending by category and by priority, a filtered
//! item listing, and the largest individual expenses.

use crate::display::report::truncate;
use crate::error::AdvisorResult;
use crate::export::csv::{amount_field, csv_writer, export_error, finish};
use crate::models::{Catalog, Flexibility, ItemKind, LineItem, Money, Priority};
use std::io::Write;

/// Default number of entries in the top-expenses list
pub const DEFAULT_TOP_N: usize = 10;

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub amount: Money,
    pub pct_of_income: f64,
    pub item_count: usize,
}

/// Spending for one priority
#[derive(Debug, Clone, PartialEq)]
pub struct PrioritySpending {
    pub priority: Priority,
    pub amount: Money,
    pub pct_of_income: f64,
}

/// One row of the detail listing or top list
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub description: String,
    pub kind: ItemKind,
    pub category: String,
    pub priority: Priority,
    pub flexibility: Flexibility,
    pub amount: Money,
}

impl From<&LineItem> for ExpenseRow {
    fn from(item: &LineItem) -> Self {
        Self {
            description: item.description().to_string(),
            kind: item.kind(),
            category: item.category().to_string(),
            priority: item.priority(),
            flexibility: item.flexibility(),
            amount: item.amount(),
        }
    }
}

/// Restricts the detail listing
///
/// Each empty list places no restriction on its field. Category matching
/// ignores case.
#[derive(Debug, Clone, Default)]
pub struct BreakdownFilter {
    pub priorities: Vec<Priority>,
    pub categories: Vec<String>,
    pub flexibilities: Vec<Flexibility>,
}

impl BreakdownFilter {
    fn matches(&self, item: &LineItem) -> bool {
        (self.priorities.is_empty() || self.priorities.contains(&item.priority()))
            && (self.flexibilities.is_empty() || self.flexibilities.contains(&item.flexibility()))
            && (self.categories.is_empty()
                || self
                    .categories
                    .iter()
                    .any(|c| c.eq_ignore_ascii_case(item.category())))
    }
}

/// Expense Breakdown Report
#[derive(Debug, Clone)]
pub struct ExpenseBreakdownReport {
    pub monthly_income: Money,
    pub total_expenses: Money,
    /// Largest category first
    pub by_category: Vec<CategorySpending>,
    /// Most important priority first
    pub by_priority: Vec<PrioritySpending>,
    /// Filtered items, by priority then amount descending
    pub details: Vec<ExpenseRow>,
    /// Largest items overall
    pub top_expenses: Vec<ExpenseRow>,
}

impl ExpenseBreakdownReport {
    /// Generate a breakdown of the current amounts in `catalog`
    pub fn generate(
        catalog: &Catalog,
        monthly_income: Money,
        filter: &BreakdownFilter,
        top_n: usize,
    ) -> Self {
        let pct = |amount: Money| amount.percent_of(monthly_income).unwrap_or(0.0);

        // Categories in first-seen order, then sorted stably by amount
        let mut by_category: Vec<CategorySpending> = Vec::new();
        for item in catalog {
            match by_category.iter_mut().find(|c| c.category == item.category()) {
                Some(entry) => {
                    entry.amount += item.amount();
                    entry.item_count += 1;
                }
                None => by_category.push(CategorySpending {
                    category: item.category().to_string(),
                    amount: item.amount(),
                    pct_of_income: 0.0,
                    item_count: 1,
                }),
            }
        }
        for entry in &mut by_category {
            entry.pct_of_income = pct(entry.amount);
        }
        by_category.sort_by(|a, b| b.amount.cmp(&a.amount));

        let by_priority = catalog
            .grouped_by_priority()
            .into_iter()
            .map(|(priority, items)| {
                let amount: Money = items.iter().map(|i| i.amount()).sum();
                PrioritySpending {
                    priority,
                    amount,
                    pct_of_income: pct(amount),
                }
            })
            .collect();

        let mut details: Vec<ExpenseRow> = catalog
            .iter()
            .filter(|i| filter.matches(i))
            .map(ExpenseRow::from)
            .collect();
        details.sort_by(|a, b| a.priority.cmp(&b.priority).then(b.amount.cmp(&a.amount)));

        let mut top_expenses: Vec<ExpenseRow> = catalog.iter().map(ExpenseRow::from).collect();
        top_expenses.sort_by(|a, b| b.amount.cmp(&a.amount));
        top_expenses.truncate(top_n);

        Self {
            monthly_income,
            total_expenses: catalog.total(),
            by_category,
            by_priority,
            details,
            top_expenses,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Expense Breakdown\n");
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(&format!("Monthly Income: {}\n", self.monthly_income));
        output.push_str(&format!("Total Expenses: {}\n\n", self.total_expenses));

        output.push_str(&format!("{:<30} {:>14} {:>8} {:>10}\n", "Category", "Amount", "Items", "% Income"));
        output.push_str(&"-".repeat(80));
        output.push('\n');
        for entry in &self.by_category {
            output.push_str(&format!(
                "{:<30} {:>14} {:>8} {:>9.1}%\n",
                truncate(&entry.category, 30),
                entry.amount,
                entry.item_count,
                entry.pct_of_income
            ));
        }

        output.push_str(&format!("\n{:<30} {:>14} {:>10}\n", "Priority", "Amount", "% Income"));
        output.push_str(&"-".repeat(80));
        output.push('\n');
        for entry in &self.by_priority {
            output.push_str(&format!(
                "{:<30} {:>14} {:>9.1}%\n",
                entry.priority, entry.amount, entry.pct_of_income
            ));
        }

        output.push_str(&format!(
            "\n{:<28} {:<8} {:<16} {:<14} {:>12}\n",
            "Item", "Type", "Category", "Priority", "Amount"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');
        for row in &self.details {
            output.push_str(&format_row(row));
        }

        if !self.top_expenses.is_empty() {
            output.push_str(&format!("\nTop {} Expenses\n", self.top_expenses.len()));
            output.push_str(&"-".repeat(80));
            output.push('\n');
            for row in &self.top_expenses {
                output.push_str(&format_row(row));
            }
        }

        output
    }

    /// Export the filtered detail listing to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> AdvisorResult<()> {
        let mut wtr = csv_writer(writer);
        wtr.write_record([
            "Description",
            "Type",
            "Category",
            "Priority",
            "Flexibility",
            "Amount",
            "Percent of Income",
        ])
        .map_err(export_error)?;

        for row in &self.details {
            wtr.write_record([
                row.description.clone(),
                row.kind.to_string(),
                row.category.clone(),
                row.priority.to_string(),
                row.flexibility.to_string(),
                amount_field(row.amount),
                format!(
                    "{:.2}",
                    row.amount.percent_of(self.monthly_income).unwrap_or(0.0)
                ),
            ])
            .map_err(export_error)?;
        }

        finish(wtr)
    }
}

fn format_row(row: &ExpenseRow) -> String {
    format!(
        "{:<28} {:<8} {:<16} {:<14} {:>12}\n",
        truncate(&row.description, 28),
        row.kind,
        truncate(&row.category, 16),
        row.priority,
        row.amount
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;

    fn units(n: i64) -> Money {
        Money::from_units(n)
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            LineItem::grocery("Rice", units(13_500), Priority::Essential, Flexibility::Low, "Food Staples"),
            LineItem::grocery("Beef", units(15_000), Priority::NiceToHave, Flexibility::High, "Protein"),
            LineItem::grocery("Sugar", units(8_000), Priority::Essential, Flexibility::Medium, "Food Staples"),
            LineItem::bill("Rent", units(500_000), Priority::Critical, Flexibility::None, "Housing"),
            LineItem::bill("Gifts", units(50_000), Priority::Discretionary, Flexibility::High, "Gifts"),
        ])
    }

    #[test]
    fn test_by_category() {
        let report = ExpenseBreakdownReport::generate(
            &catalog(),
            units(1_000_000),
            &BreakdownFilter::default(),
            DEFAULT_TOP_N,
        );

        let names: Vec<&str> = report.by_category.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Housing", "Gifts", "Food Staples", "Protein"]);
        assert_eq!(report.by_category[2].amount, units(21_500));
        assert_eq!(report.by_category[2].item_count, 2);
        assert!((report.by_category[0].pct_of_income - 50.0).abs() < 1e-9);
        assert_eq!(report.total_expenses, units(586_500));
    }

    #[test]
    fn test_by_priority_in_rank_order() {
        let report = ExpenseBreakdownReport::generate(
            &catalog(),
            units(1_000_000),
            &BreakdownFilter::default(),
            DEFAULT_TOP_N,
        );
        let order: Vec<Priority> = report.by_priority.iter().map(|p| p.priority).collect();
        assert_eq!(
            order,
            vec![
                Priority::Critical,
                Priority::Essential,
                Priority::Discretionary,
                Priority::NiceToHave
            ]
        );
    }

    #[test]
    fn test_details_filtered_and_sorted() {
        let filter = BreakdownFilter {
            priorities: vec![Priority::Essential, Priority::NiceToHave],
            categories: vec!["food staples".into(), "protein".into()],
            flexibilities: Vec::new(),
        };
        let report = ExpenseBreakdownReport::generate(&catalog(), units(1_000_000), &filter, 3);

        let names: Vec<&str> = report.details.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(names, vec!["Rice", "Sugar", "Beef"]);

        let top: Vec<&str> = report.top_expenses.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(top, vec!["Rent", "Gifts", "Beef"]);
    }

    #[test]
    fn test_flexibility_filter() {
        let filter = BreakdownFilter {
            flexibilities: vec![Flexibility::High],
            ..BreakdownFilter::default()
        };
        let report = ExpenseBreakdownReport::generate(&catalog(), units(1_000_000), &filter, 0);
        assert_eq!(report.details.len(), 2);
        assert!(report.top_expenses.is_empty());
    }

    #[test]
    fn test_export_csv() {
        let filter = BreakdownFilter {
            priorities: vec![Priority::Critical],
            ..BreakdownFilter::default()
        };
        let report = ExpenseBreakdownReport::generate(&catalog(), units(1_000_000), &filter, 5);

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        assert_eq!(
            csv,
            "Description,Type,Category,Priority,Flexibility,Amount,Percent of Income\n\
             Rent,Bill,Housing,Critical,None,500000.00,50.00\n"
        );
    }

    #[test]
    fn test_default_catalog_terminal() {
        let income = units(5_000_000);
        let report = ExpenseBreakdownReport::generate(
            &default_catalog(income),
            income,
            &BreakdownFilter::default(),
            DEFAULT_TOP_N,
        );
        let output = report.format_terminal();
        assert!(output.contains("Total Expenses: 2,458,500"));
        assert!(output.contains("Top 10 Expenses"));
    }
}
