//! Built-in household catalog
//!
//! The default grocery list and bill schedule. Prices are entered the way the
//! household pays them (per week, per month, per school term) and normalized
//! to monthly amounts when the catalog is built.

use crate::models::{
    Catalog, Flexibility, Frequency, ItemKind, LineItemTemplate, Money, Price, Priority,
};

/// Share of income given as tithe
pub const TITHE_PCT: f64 = 10.0;

fn grocery(
    description: &str,
    quantity: &str,
    price: i64,
    priority: Priority,
    category: &str,
    flexibility: Flexibility,
) -> LineItemTemplate {
    LineItemTemplate::new(
        description,
        ItemKind::Grocery,
        Money::from_units(price),
        priority,
        flexibility,
        category,
    )
    .quantity(quantity)
}

fn bill(
    description: &str,
    price: i64,
    priority: Priority,
    flexibility: Flexibility,
    category: &str,
) -> LineItemTemplate {
    LineItemTemplate::new(
        description,
        ItemKind::Bill,
        Money::from_units(price),
        priority,
        flexibility,
        category,
    )
}

/// Default grocery templates, in shopping-list order
pub fn default_groceries() -> Vec<LineItemTemplate> {
    use Flexibility::{High, Low, Medium};
    use Priority::{Discretionary, Essential, NiceToHave};

    vec![
        grocery("Rice", "3 kgs", 13_500, Essential, "Food Staples", Low),
        grocery("Tooth paste", "1 piece", 6_000, Essential, "Personal Care", Medium),
        grocery("Shoe polish", "1", 3_500, Discretionary, "Personal Care", High),
        grocery("Gizzards", "1 pack", 15_000, NiceToHave, "Protein", High),
        grocery("Viennas", "1 pack", 12_000, NiceToHave, "Protein", High),
        grocery("Milk", "1 box", 24_000, Essential, "Dairy", Medium),
        grocery("Irish potatoes", "1 month supply", 30_000, Essential, "Food Staples", Low),
        grocery("Baby oil", "1", 15_000, Essential, "Personal Care", Medium),
        grocery("Sugar", "2 kgs", 8_000, Essential, "Food Staples", Medium),
        grocery("Beef", "1 kg", 15_000, NiceToHave, "Protein", High),
        grocery("Chicken", "1 kg", 15_000, NiceToHave, "Protein", High),
        grocery("Squishy drink", "10", 20_000, Discretionary, "Beverages", High),
        grocery("Soap", "1 bar", 6_000, Essential, "Personal Care", Low),
        grocery("Eggs", "1 tray", 12_500, Essential, "Protein", Medium),
        grocery("Bread", "1 big", 6_000, Essential, "Food Staples", Medium)
            .frequency(Frequency::Weekly),
        grocery("Spaghetti", "10 packs", 20_000, Essential, "Food Staples", Medium),
        grocery("Onions", "1 kg", 6_000, Essential, "Vegetables", Medium),
        grocery("Green pepper", "", 2_000, NiceToHave, "Vegetables", High),
        grocery("Drinks", "", 20_000, Discretionary, "Beverages", High),
        grocery("Carrots", "", 3_000, NiceToHave, "Vegetables", High),
        grocery("Ginger", "0.5 kg", 3_000, NiceToHave, "Vegetables", High),
        grocery("Tomatoes", "", 6_000, Essential, "Vegetables", Medium),
        grocery("Medicine (Azithromycin)", "", 7_000, Essential, "Healthcare", Low),
    ]
}

/// Default bill templates
pub fn default_bills() -> Vec<LineItemTemplate> {
    use Flexibility::{High, Low, Medium};
    use Priority::{Critical, Discretionary, Essential, Investment};

    vec![
        bill("Rent", 500_000, Critical, Flexibility::None, "Housing"),
        bill("Water", 24_000, Critical, Low, "Utilities"),
        bill("Electricity", 40_000, Critical, Medium, "Utilities"),
        bill("Garbage", 10_000, Critical, Low, "Utilities"),
        bill("Laundry", 12_000, Essential, High, "Personal Care").frequency(Frequency::Weekly),
        bill("Fuel", 50_000, Essential, Medium, "Transport").frequency(Frequency::Weekly),
        bill("Tithe", 0, Essential, Medium, "Donations").price(Price::ShareOfIncome(TITHE_PCT)),
        bill("Family dates", 150_000, Discretionary, High, "Entertainment"),
        bill("Skin care", 200_000, Discretionary, High, "Personal Care")
            .frequency(Frequency::PerTerm),
        bill("Pig farming", 250_000, Investment, High, "Investments"),
        bill("Health fund", 100_000, Essential, Medium, "Healthcare"),
        bill("School fees (Eliana)", 700_000, Critical, Flexibility::None, "Education")
            .frequency(Frequency::PerTerm),
        bill("Gifts", 50_000, Discretionary, High, "Gifts"),
    ]
}

/// Every default template: groceries first, then bills
pub fn default_templates() -> Vec<LineItemTemplate> {
    let mut templates = default_groceries();
    templates.extend(default_bills());
    templates
}

/// The built-in catalog materialized for a monthly income
pub fn default_catalog(monthly_income: Money) -> Catalog {
    Catalog::from_templates(&default_templates(), monthly_income)
}
