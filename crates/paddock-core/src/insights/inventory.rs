// ── Inventory aggregates ──

use std::collections::BTreeMap;
use std::sync::Arc;

use super::MONTHLY_BUDGET;
use crate::model::{InventoryCategory, InventoryItem, StockStatus};

/// Σ quantity × costPerUnit.
pub fn total_value(items: &[Arc<InventoryItem>]) -> f64 {
    items.iter().map(|i| i.total_value()).sum()
}

/// Inventory value as a percentage of [`MONTHLY_BUDGET`]. May exceed 100.
pub fn budget_utilization(total_value: f64) -> f64 {
    total_value / MONTHLY_BUDGET * 100.0
}

pub fn value_by_category(items: &[Arc<InventoryItem>]) -> BTreeMap<InventoryCategory, f64> {
    let mut values = BTreeMap::new();
    for item in items {
        *values.entry(item.category).or_insert(0.0) += item.total_value();
    }
    values
}

pub fn count_by_status(items: &[Arc<InventoryItem>]) -> BTreeMap<StockStatus, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item.status).or_insert(0) += 1;
    }
    counts
}

/// Items not In Stock: Out of Stock first, then Low Stock, each by name.
pub fn reorder_list(items: &[Arc<InventoryItem>]) -> Vec<Arc<InventoryItem>> {
    let mut low: Vec<_> = items.iter().filter(|i| i.needs_reorder()).cloned().collect();
    low.sort_by(|a, b| b.status.cmp(&a.status).then_with(|| a.name.cmp(&b.name)));
    low
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::insights::fixtures::item;

    #[test]
    fn values_and_reorder_list() {
        let items = vec![
            item("I001", InventoryCategory::Food, 10.0, 12.5, StockStatus::InStock),
            item("I002", InventoryCategory::Medicine, 2.0, 40.0, StockStatus::LowStock),
            item("I003", InventoryCategory::Food, 0.0, 9.0, StockStatus::OutOfStock),
        ];

        let total = total_value(&items);
        assert!((total - 205.0).abs() < f64::EPSILON);
        assert!((budget_utilization(total) - 4.1).abs() < 1e-9);

        let by_category = value_by_category(&items);
        assert!((by_category[&InventoryCategory::Food] - 125.0).abs() < f64::EPSILON);
        assert!((by_category[&InventoryCategory::Medicine] - 80.0).abs() < f64::EPSILON);

        let ids: Vec<String> = reorder_list(&items).iter().map(|i| i.id.to_string()).collect();
        assert_eq!(ids, ["I003", "I002"]);
    }
}
