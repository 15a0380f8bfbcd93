//! Catalog display formatting
//!
//! Renders line items as a table.

use tabled::{Table, Tabled};

use crate::models::{Catalog, ItemKind, LineItem, Money};

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Item")]
    description: String,
    #[tabled(rename = "Qty")]
    quantity: String,
    #[tabled(rename = "Type")]
    kind: ItemKind,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Flexibility")]
    flexibility: String,
    #[tabled(rename = "Monthly")]
    amount: Money,
    #[tabled(rename = "Original")]
    original: String,
}

impl From<&LineItem> for ItemRow {
    fn from(item: &LineItem) -> Self {
        Self {
            description: item.description().to_string(),
            quantity: item.quantity().to_string(),
            kind: item.kind(),
            category: item.category().to_string(),
            priority: item.priority().to_string(),
            flexibility: item.flexibility().to_string(),
            amount: item.amount(),
            // only shown once the amount has moved
            original: if item.is_adjusted() {
                item.original_amount().to_string()
            } else {
                String::new()
            },
        }
    }
}

/// Format line items as a table, optionally limited to one kind
pub fn format_catalog_table(catalog: &Catalog, kind: Option<ItemKind>) -> String {
    let items: Vec<&LineItem> = catalog
        .iter()
        .filter(|i| kind.map_or(true, |k| i.kind() == k))
        .collect();

    if items.is_empty() {
        return "No line items.\n".to_string();
    }

    let total: Money = items.iter().map(|i| i.amount()).sum();
    let rows: Vec<ItemRow> = items.into_iter().map(ItemRow::from).collect();
    let count = rows.len();

    format!(
        "{}\n{} items, total {} per month\n",
        Table::new(rows),
        count,
        total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;

    #[test]
    fn test_format_catalog_table() {
        let catalog = default_catalog(Money::from_units(5_000_000));
        let output = format_catalog_table(&catalog, None);

        assert!(output.contains("Item"));
        assert!(output.contains("Rice"));
        assert!(output.contains("Nice-to-have"));
        assert!(output.contains("36 items, total 2,458,500 per month"));
    }

    #[test]
    fn test_filter_by_kind() {
        let catalog = default_catalog(Money::from_units(5_000_000));
        let output = format_catalog_table(&catalog, Some(ItemKind::Bill));

        assert!(output.contains("Rent"));
        assert!(!output.contains("Rice"));
        assert!(output.contains("13 items, total 2,172,000 per month"));
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(
            format_catalog_table(&Catalog::default(), None),
            "No line items.\n"
        );
    }
}
