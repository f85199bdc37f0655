// ── Dashboard summary ──

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use super::{animals, breeding, feeding, health, inventory};
use crate::model::{FeedingTask, HealthRecord, InventoryItem};
use crate::store::FacilitySnapshot;

/// Pending feeding tasks + inventory items not In Stock + health
/// records not Completed.
pub fn alert_count(
    feeding_tasks: &[Arc<FeedingTask>],
    inventory_items: &[Arc<InventoryItem>],
    health_records: &[Arc<HealthRecord>],
) -> usize {
    feeding::pending(feeding_tasks)
        + inventory_items.iter().filter(|i| i.needs_reorder()).count()
        + health::open_records(health_records)
}

/// Headline numbers for the landing screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_animals: usize,
    pub animals_needing_attention: usize,
    pub pending_feedings: usize,
    pub items_to_reorder: usize,
    pub open_health_records: usize,
    pub breedings_due_soon: usize,
    pub alert_count: usize,
    pub active_staff: usize,
    pub inventory_value: f64,
    /// Percent of the monthly budget.
    pub budget_utilization: f64,
}

pub fn dashboard_summary(snapshot: &FacilitySnapshot, today: NaiveDate) -> DashboardSummary {
    let inventory_value = inventory::total_value(&snapshot.inventory);

    DashboardSummary {
        total_animals: snapshot.animals.len(),
        animals_needing_attention: animals::needing_attention(&snapshot.animals),
        pending_feedings: feeding::pending(&snapshot.feeding_tasks),
        items_to_reorder: inventory::reorder_list(&snapshot.inventory).len(),
        open_health_records: health::open_records(&snapshot.health_records),
        breedings_due_soon: breeding::due_soon(&snapshot.breeding_records, today).len(),
        alert_count: alert_count(
            &snapshot.feeding_tasks,
            &snapshot.inventory,
            &snapshot.health_records,
        ),
        active_staff: super::staff::active(&snapshot.staff),
        inventory_value,
        budget_utilization: inventory::budget_utilization(inventory_value),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::insights::fixtures::*;
    use crate::model::*;

    #[test]
    fn alert_count_sums_three_sources() {
        let today = date(2024, 6, 10);
        let snapshot = FacilitySnapshot {
            animals: Arc::new(vec![
                animal("A001", "Dog", AnimalStatus::Healthy),
                animal("A002", "Dog", AnimalStatus::Quarantine),
            ]),
            health_records: Arc::new(vec![
                health("H001", "A001", today, HealthStatus::Completed, None),
                health("H002", "A002", today, HealthStatus::Ongoing, None),
            ]),
            feeding_tasks: Arc::new(vec![
                feeding("F001", "A001", FeedingStatus::Pending),
                feeding("F002", "A002", FeedingStatus::Pending),
                feeding("F003", "A002", FeedingStatus::Completed),
            ]),
            breeding_records: Arc::new(vec![breeding(
                "B001",
                date(2024, 6, 20),
                BreedingStatus::Pregnant,
            )]),
            inventory: Arc::new(vec![
                item("I001", InventoryCategory::Food, 100.0, 10.0, StockStatus::InStock),
                item("I002", InventoryCategory::Supplies, 3.0, 50.0, StockStatus::LowStock),
            ]),
            staff: Arc::new(vec![staff("S001", StaffRole::Manager, StaffStatus::Active)]),
            settings: Arc::new(FacilitySettings::default()),
        };

        let summary = dashboard_summary(&snapshot, today);
        assert_eq!(summary.alert_count, 2 + 1 + 1);
        assert_eq!(summary.animals_needing_attention, 1);
        assert_eq!(summary.breedings_due_soon, 1);
        assert_eq!(summary.items_to_reorder, 1);
        assert_eq!(summary.active_staff, 1);
        assert!((summary.inventory_value - 1150.0).abs() < f64::EPSILON);
        assert!((summary.budget_utilization - 23.0).abs() < 1e-9);
    }
}
