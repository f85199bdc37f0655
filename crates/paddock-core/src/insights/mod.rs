// ── Derived aggregates ──
//
// Pure functions over collection snapshots. Nothing here is stored;
// callers recompute on every snapshot change. Functions that depend on
// the calendar take `today` explicitly.

pub mod animals;
pub mod breeding;
pub mod dashboard;
pub mod feeding;
pub mod health;
pub mod inventory;
pub mod reports;
pub mod staff;

pub use dashboard::{DashboardSummary, alert_count, dashboard_summary};
pub use reports::{MonthlyActivity, Report, ReportFilters, ReportMetric, ReportType, TimeRange};

/// Fixed monthly spend ceiling the inventory value is measured against.
pub const MONTHLY_BUDGET: f64 = 5000.0;

/// Window, in days, for "due soon" breeding and health reminders.
pub const DUE_SOON_DAYS: i64 = 14;

/// `part / whole` as a percentage, `None` when `whole` is zero.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn percentage(part: usize, whole: usize) -> Option<f64> {
    (whole > 0).then(|| part as f64 / whole as f64 * 100.0)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::model::*;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    pub fn animal(id: &str, species: &str, status: AnimalStatus) -> Arc<Animal> {
        Arc::new(Animal {
            id: EntityId::from(id),
            name: format!("animal-{id}"),
            species: species.into(),
            breed: "Mixed".into(),
            age: 2,
            gender: Gender::Unknown,
            weight: None,
            status,
            notes: None,
            created_at: None,
            updated_at: None,
        })
    }

    pub fn health(
        id: &str,
        animal_id: &str,
        on: NaiveDate,
        status: HealthStatus,
        next_due: Option<NaiveDate>,
    ) -> Arc<HealthRecord> {
        Arc::new(HealthRecord {
            id: EntityId::from(id),
            animal_id: EntityId::from(animal_id),
            record_type: HealthRecordType::Checkup,
            description: "Routine".into(),
            date: on,
            veterinarian: "Dr. Patel".into(),
            status,
            next_due,
            notes: None,
            created_at: None,
            updated_at: None,
        })
    }

    pub fn feeding(id: &str, animal_id: &str, status: FeedingStatus) -> Arc<FeedingTask> {
        Arc::new(FeedingTask {
            id: EntityId::from(id),
            animal_id: EntityId::from(animal_id),
            animal_name: "Rex".into(),
            food_type: "Kibble".into(),
            quantity: "1 kg".into(),
            time: "08:00".into(),
            frequency: FeedingFrequency::TwiceDaily,
            status,
            start_date: date(2024, 1, 1),
            created_at: None,
            updated_at: None,
        })
    }

    pub fn breeding(id: &str, due: NaiveDate, status: BreedingStatus) -> Arc<BreedingRecord> {
        Arc::new(BreedingRecord {
            id: EntityId::from(id),
            mother_id: EntityId::from("A002"),
            father_id: EntityId::from("A001"),
            mating_date: due - chrono::Duration::days(60),
            due_date: due,
            expected_litter: None,
            actual_litter: None,
            status,
            notes: None,
            created_at: None,
            updated_at: None,
        })
    }

    pub fn item(
        id: &str,
        category: InventoryCategory,
        quantity: f64,
        cost: f64,
        status: StockStatus,
    ) -> Arc<InventoryItem> {
        Arc::new(InventoryItem {
            id: EntityId::from(id),
            name: format!("item-{id}"),
            category,
            quantity,
            unit: "units".into(),
            reorder_level: 5.0,
            cost_per_unit: cost,
            status,
            created_at: None,
            updated_at: None,
        })
    }

    pub fn staff(id: &str, role: StaffRole, status: StaffStatus) -> Arc<StaffMember> {
        Arc::new(StaffMember {
            id: EntityId::from(id),
            name: format!("staff-{id}"),
            role,
            email: format!("{id}@greenvalley.com"),
            phone: "(555) 000-0000".into(),
            status,
            joined: date(2022, 6, 1),
            notes: None,
            created_at: None,
            updated_at: None,
        })
    }
}
