// ── Reports ──
//
// Report filters are UI state: chosen on the reports screen, kept in the
// store for the session, never sent to the backend.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use super::{DUE_SOON_DAYS, animals, breeding, feeding, health, inventory, staff};
use crate::store::FacilitySnapshot;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl TimeRange {
    pub fn days(self) -> i64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }

    /// First day covered by the range, counting today as the last.
    pub fn start(self, today: NaiveDate) -> NaiveDate {
        today - Duration::days(self.days() - 1)
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    #[default]
    Overview,
    Health,
    Feeding,
    Breeding,
    Inventory,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilters {
    pub time_range: TimeRange,
    pub report_type: ReportType,
}

/// Activity recorded in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyActivity {
    /// `YYYY-MM`.
    pub month: String,
    pub new_animals: usize,
    pub health_records: usize,
    pub feeding_tasks: usize,
    pub breedings: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetric {
    pub label: &'static str,
    pub value: String,
}

impl ReportMetric {
    fn new(label: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }

    fn percent(label: &'static str, value: Option<f64>) -> Self {
        Self::new(
            label,
            value.map_or_else(|| "n/a".to_owned(), |v| format!("{v:.1}%")),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub report_type: ReportType,
    pub time_range: TimeRange,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub metrics: Vec<ReportMetric>,
    pub series: Vec<MonthlyActivity>,
}

fn month_key(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

/// Monthly activity buckets from the month of `from` through the month
/// of `to`. Only dated events inside `[from, to]` are counted; animals
/// are dated by their server `createdAt`.
pub fn monthly_series(
    snapshot: &FacilitySnapshot,
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<MonthlyActivity> {
    let mut series = Vec::new();
    let (mut year, mut month) = month_key(from);
    let last = month_key(to);
    while (year, month) <= last {
        series.push(MonthlyActivity {
            month: format!("{year:04}-{month:02}"),
            new_animals: 0,
            health_records: 0,
            feeding_tasks: 0,
            breedings: 0,
        });
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }

    let month_number = |date: NaiveDate| i64::from(date.year()) * 12 + i64::from(date.month());
    let index = |date: NaiveDate| -> Option<usize> {
        if date < from || date > to {
            return None;
        }
        usize::try_from(month_number(date) - month_number(from)).ok()
    };

    for animal in snapshot.animals.iter() {
        if let Some(i) = animal.created_at.and_then(|t| index(t.date_naive())) {
            series[i].new_animals += 1;
        }
    }
    for record in snapshot.health_records.iter() {
        if let Some(i) = index(record.date) {
            series[i].health_records += 1;
        }
    }
    for task in snapshot.feeding_tasks.iter() {
        if let Some(i) = index(task.start_date) {
            series[i].feeding_tasks += 1;
        }
    }
    for record in snapshot.breeding_records.iter() {
        if let Some(i) = index(record.mating_date) {
            series[i].breedings += 1;
        }
    }

    series
}

/// Build the report the filters select.
pub fn build_report(snapshot: &FacilitySnapshot, filters: ReportFilters, today: NaiveDate) -> Report {
    let from = filters.time_range.start(today);
    let series = monthly_series(snapshot, from, today);
    let in_range = |date: NaiveDate| date >= from && date <= today;

    let metrics = match filters.report_type {
        ReportType::Overview => vec![
            ReportMetric::new("Animals", snapshot.animals.len()),
            ReportMetric::new(
                "Needing attention",
                animals::needing_attention(&snapshot.animals),
            ),
            ReportMetric::new("Active staff", staff::active(&snapshot.staff)),
            ReportMetric::new(
                "Alerts",
                super::alert_count(
                    &snapshot.feeding_tasks,
                    &snapshot.inventory,
                    &snapshot.health_records,
                ),
            ),
            ReportMetric::new(
                "Inventory value",
                format!("${:.2}", inventory::total_value(&snapshot.inventory)),
            ),
        ],
        ReportType::Health => {
            let in_window = snapshot
                .health_records
                .iter()
                .filter(|r| in_range(r.date))
                .count();
            vec![
                ReportMetric::new("Records in range", in_window),
                ReportMetric::new("Open records", health::open_records(&snapshot.health_records)),
                ReportMetric::new(
                    "Due in 14 days",
                    health::upcoming(&snapshot.health_records, today, DUE_SOON_DAYS).len(),
                ),
                ReportMetric::new(
                    "Overdue",
                    health::overdue(&snapshot.health_records, today).len(),
                ),
            ]
        }
        ReportType::Feeding => vec![
            ReportMetric::new("Tasks", snapshot.feeding_tasks.len()),
            ReportMetric::new("Pending", feeding::pending(&snapshot.feeding_tasks)),
            ReportMetric::percent(
                "Completion rate",
                feeding::completion_rate(&snapshot.feeding_tasks),
            ),
        ],
        ReportType::Breeding => {
            let counts = breeding::count_by_status(&snapshot.breeding_records);
            let of = |s| counts.get(&s).copied().unwrap_or(0);
            vec![
                ReportMetric::new("Pregnant", of(crate::model::BreedingStatus::Pregnant)),
                ReportMetric::new("Delivered", of(crate::model::BreedingStatus::Delivered)),
                ReportMetric::new(
                    "Due in 14 days",
                    breeding::due_soon(&snapshot.breeding_records, today).len(),
                ),
                ReportMetric::percent(
                    "Success rate",
                    breeding::success_rate(&snapshot.breeding_records),
                ),
            ]
        }
        ReportType::Inventory => {
            let value = inventory::total_value(&snapshot.inventory);
            vec![
                ReportMetric::new("Items", snapshot.inventory.len()),
                ReportMetric::new("Total value", format!("${value:.2}")),
                ReportMetric::percent(
                    "Budget used",
                    Some(inventory::budget_utilization(value)),
                ),
                ReportMetric::new(
                    "To reorder",
                    inventory::reorder_list(&snapshot.inventory).len(),
                ),
            ]
        }
    };

    Report {
        report_type: filters.report_type,
        time_range: filters.time_range,
        from,
        to: today,
        metrics,
        series,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::insights::fixtures::*;
    use crate::model::*;

    fn empty_snapshot() -> FacilitySnapshot {
        FacilitySnapshot {
            animals: Arc::default(),
            health_records: Arc::default(),
            feeding_tasks: Arc::default(),
            breeding_records: Arc::default(),
            inventory: Arc::default(),
            staff: Arc::default(),
            settings: Arc::default(),
        }
    }

    #[test]
    fn ranges_count_today_as_last_day() {
        let today = date(2024, 6, 10);
        assert_eq!(TimeRange::Week.start(today), date(2024, 6, 4));
        assert_eq!(TimeRange::Month.start(today), date(2024, 5, 12));
        assert_eq!("QUARTER".parse::<TimeRange>().unwrap(), TimeRange::Quarter);
        assert_eq!(ReportFilters::default().report_type, ReportType::Overview);
    }

    #[test]
    fn monthly_series_buckets_across_year_end() {
        let mut snapshot = empty_snapshot();
        let mut rex = (*animal("A001", "Dog", AnimalStatus::Healthy)).clone();
        rex.created_at = Some(Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap());
        snapshot.animals = Arc::new(vec![Arc::new(rex)]);
        snapshot.health_records = Arc::new(vec![
            health("H001", "A001", date(2023, 12, 20), HealthStatus::Completed, None),
            health("H002", "A001", date(2024, 1, 2), HealthStatus::Completed, None),
            health("H003", "A001", date(2023, 10, 1), HealthStatus::Completed, None),
        ]);

        let series = monthly_series(&snapshot, date(2023, 12, 1), date(2024, 1, 31));
        assert_eq!(
            series,
            vec![
                MonthlyActivity {
                    month: "2023-12".into(),
                    new_animals: 0,
                    health_records: 1,
                    feeding_tasks: 0,
                    breedings: 0,
                },
                MonthlyActivity {
                    month: "2024-01".into(),
                    new_animals: 1,
                    health_records: 1,
                    feeding_tasks: 0,
                    breedings: 0,
                },
            ]
        );
        assert!(snapshot.feeding_tasks.is_empty());
    }

    #[test]
    fn breeding_report_lists_success_rate() {
        let mut snapshot = empty_snapshot();
        snapshot.breeding_records = Arc::new(vec![
            breeding("B001", date(2024, 5, 1), BreedingStatus::Delivered),
            breeding("B002", date(2024, 6, 15), BreedingStatus::Pregnant),
        ]);
        let filters = ReportFilters {
            time_range: TimeRange::Quarter,
            report_type: ReportType::Breeding,
        };

        let report = build_report(&snapshot, filters, date(2024, 6, 10));
        let rate = report
            .metrics
            .iter()
            .find(|m| m.label == "Success rate")
            .unwrap();
        assert_eq!(rate.value, "100.0%");
        assert_eq!(report.series.len(), 4);
    }
}
