//! Catalog model
//!
//! An ordered collection of line items. Grouped views (by priority, by
//! flexibility, by kind) are computed on demand from the item list; the only
//! mutations are the bulk cut and scale helpers, which go through
//! [`LineItem`]'s own invariant-preserving methods.

use serde::Serialize;

use super::line_item::{LineItem, LineItemTemplate};
use super::money::Money;
use super::priority::{Flexibility, ItemKind, Priority};

/// Ordered collection of grocery and bill line items
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<LineItem>,
}

impl Catalog {
    /// Create a catalog from line items, keeping their order
    pub fn new(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// Materialize templates into monthly line items for a given income
    pub fn from_templates(templates: &[LineItemTemplate], monthly_income: Money) -> Self {
        Self::new(
            templates
                .iter()
                .map(|t| LineItem::from_template(t, monthly_income))
                .collect(),
        )
    }

    /// Append an item
    pub fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Grocery items in catalog order
    pub fn groceries(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter(|i| i.is_grocery())
    }

    /// Bills in catalog order
    pub fn bills(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter(|i| i.is_bill())
    }

    /// Items of one kind in catalog order
    pub fn of_kind(&self, kind: ItemKind) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter(move |i| i.kind() == kind)
    }

    /// Sum of current amounts
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::amount).sum()
    }

    /// Sum of original amounts
    pub fn original_total(&self) -> Money {
        self.items.iter().map(LineItem::original_amount).sum()
    }

    /// Sum of current amounts over items matching `pred`
    pub fn total_where<F>(&self, pred: F) -> Money
    where
        F: Fn(&LineItem) -> bool,
    {
        self.items
            .iter()
            .filter(|i| pred(*i))
            .map(LineItem::amount)
            .sum()
    }

    /// Items with the given priority
    pub fn by_priority(&self, priority: Priority) -> Vec<&LineItem> {
        self.items.iter().filter(|i| i.priority() == priority).collect()
    }

    /// Items with the given flexibility
    pub fn by_flexibility(&self, flexibility: Flexibility) -> Vec<&LineItem> {
        self.items
            .iter()
            .filter(|i| i.flexibility() == flexibility)
            .collect()
    }

    /// Non-empty priority groups, most important priority first
    pub fn grouped_by_priority(&self) -> Vec<(Priority, Vec<&LineItem>)> {
        Priority::all()
            .iter()
            .map(|p| (*p, self.by_priority(*p)))
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }

    /// The `n` largest items of a kind, by current amount descending
    ///
    /// Ties keep catalog order.
    pub fn largest(&self, kind: ItemKind, n: usize) -> Vec<&LineItem> {
        let mut items: Vec<&LineItem> = self.of_kind(kind).collect();
        // sort_by is stable
        items.sort_by(|a, b| b.amount().cmp(&a.amount()));
        items.truncate(n);
        items
    }

    /// Reset matching items to their original amount less `cut_pct` percent
    pub fn apply_cut_where<F>(&mut self, pred: F, cut_pct: f64) -> usize
    where
        F: Fn(&LineItem) -> bool,
    {
        let mut count = 0;
        for item in self.items.iter_mut().filter(|i| pred(&**i)) {
            item.apply_cut(cut_pct);
            count += 1;
        }
        count
    }

    /// Multiply the current amount of matching items by `factor`
    pub fn scale_where<F>(&mut self, pred: F, factor: f64) -> usize
    where
        F: Fn(&LineItem) -> bool,
    {
        let mut count = 0;
        for item in self.items.iter_mut().filter(|i| pred(&**i)) {
            item.scale_amount(factor);
            count += 1;
        }
        count
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<LineItem> for Catalog {
    fn from_iter<I: IntoIterator<Item = LineItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            LineItem::grocery(
                "Rice",
                Money::from_units(13_500),
                Priority::Essential,
                Flexibility::Low,
                "Food Staples",
            ),
            LineItem::grocery(
                "Drinks",
                Money::from_units(20_000),
                Priority::Discretionary,
                Flexibility::High,
                "Beverages",
            ),
            LineItem::grocery(
                "Squishy drink",
                Money::from_units(20_000),
                Priority::Discretionary,
                Flexibility::High,
                "Beverages",
            ),
            LineItem::bill(
                "Rent",
                Money::from_units(500_000),
                Priority::Critical,
                Flexibility::None,
                "Housing",
            ),
            LineItem::bill(
                "Gifts",
                Money::from_units(50_000),
                Priority::Discretionary,
                Flexibility::High,
                "Gifts",
            ),
        ])
    }

    #[test]
    fn test_partitions() {
        let catalog = sample();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.groceries().count(), 3);
        assert_eq!(catalog.bills().count(), 2);
    }

    #[test]
    fn test_totals() {
        let catalog = sample();
        assert_eq!(catalog.total(), Money::from_units(603_500));
        assert_eq!(
            catalog.total_where(|i| i.priority() == Priority::Discretionary),
            Money::from_units(90_000)
        );
    }

    #[test]
    fn test_grouped_by_priority_skips_empty() {
        let catalog = sample();
        let groups = catalog.grouped_by_priority();
        let priorities: Vec<Priority> = groups.iter().map(|(p, _)| *p).collect();
        assert_eq!(
            priorities,
            vec![Priority::Critical, Priority::Essential, Priority::Discretionary]
        );
        assert_eq!(groups[2].1.len(), 3);
    }

    #[test]
    fn test_largest_is_stable_on_ties() {
        let catalog = sample();
        let top: Vec<&str> = catalog
            .largest(ItemKind::Grocery, 2)
            .iter()
            .map(|i| i.description())
            .collect();
        assert_eq!(top, vec!["Drinks", "Squishy drink"]);
    }

    #[test]
    fn test_scale_where_leaves_originals() {
        let mut catalog = sample();
        let scaled = catalog.scale_where(|i| i.priority() == Priority::Discretionary, 0.5);
        assert_eq!(scaled, 3);
        assert_eq!(catalog.total(), Money::from_units(558_500));
        assert_eq!(catalog.original_total(), Money::from_units(603_500));
    }

    #[test]
    fn test_serializes_as_list() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["description"], "Rice");
        assert_eq!(json[0]["priority"], "Essential");
    }
}
