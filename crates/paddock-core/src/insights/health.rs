// ── Health record aggregates ──

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};

use crate::model::{HealthRecord, HealthRecordType, HealthStatus};

pub fn count_by_status(records: &[Arc<HealthRecord>]) -> BTreeMap<HealthStatus, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.status).or_insert(0) += 1;
    }
    counts
}

pub fn count_by_type(records: &[Arc<HealthRecord>]) -> BTreeMap<HealthRecordType, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.record_type).or_insert(0) += 1;
    }
    counts
}

/// Records not yet Completed. Each one counts toward the dashboard alerts.
pub fn open_records(records: &[Arc<HealthRecord>]) -> usize {
    records.iter().filter(|r| r.status.is_open()).count()
}

/// Follow-ups due between today and `today + window_days`, inclusive,
/// soonest first.
pub fn upcoming(
    records: &[Arc<HealthRecord>],
    today: NaiveDate,
    window_days: i64,
) -> Vec<Arc<HealthRecord>> {
    let horizon = today + Duration::days(window_days);
    let mut due: Vec<_> = records
        .iter()
        .filter(|r| r.next_due.is_some_and(|d| d >= today && d <= horizon))
        .cloned()
        .collect();
    due.sort_by_key(|r| r.next_due);
    due
}

/// Open records whose follow-up date has already passed, oldest first.
pub fn overdue(records: &[Arc<HealthRecord>], today: NaiveDate) -> Vec<Arc<HealthRecord>> {
    let mut late: Vec<_> = records
        .iter()
        .filter(|r| r.status.is_open() && r.next_due.is_some_and(|d| d < today))
        .cloned()
        .collect();
    late.sort_by_key(|r| r.next_due);
    late
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::insights::fixtures::{date, health};

    #[test]
    fn upcoming_and_overdue_windows() {
        let today = date(2024, 6, 10);
        let records = vec![
            health("H001", "A001", date(2024, 5, 1), HealthStatus::Completed, Some(date(2024, 6, 24))),
            health("H002", "A001", date(2024, 5, 1), HealthStatus::Ongoing, Some(date(2024, 6, 25))),
            health("H003", "A002", date(2024, 5, 1), HealthStatus::Scheduled, Some(date(2024, 6, 10))),
            health("H004", "A002", date(2024, 5, 1), HealthStatus::Ongoing, Some(date(2024, 6, 9))),
            health("H005", "A003", date(2024, 5, 1), HealthStatus::Completed, Some(date(2024, 6, 1))),
            health("H006", "A003", date(2024, 5, 1), HealthStatus::Scheduled, None),
        ];

        let ids = |v: Vec<Arc<HealthRecord>>| -> Vec<String> {
            v.iter().map(|r| r.id.to_string()).collect()
        };

        assert_eq!(ids(upcoming(&records, today, 14)), ["H003", "H001"]);
        assert_eq!(ids(overdue(&records, today)), ["H004"]);
        assert_eq!(open_records(&records), 4);
        assert_eq!(count_by_status(&records)[&HealthStatus::Completed], 2);
        assert_eq!(count_by_type(&records)[&HealthRecordType::Checkup], 6);
    }
}
