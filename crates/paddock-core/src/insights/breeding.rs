// ── Breeding aggregates ──

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;

use super::{DUE_SOON_DAYS, percentage};
use crate::model::{BreedingRecord, BreedingStatus};

/// Pregnant records due within [`DUE_SOON_DAYS`] of today: not in the
/// past, boundary day included. Soonest first.
pub fn due_soon(records: &[Arc<BreedingRecord>], today: NaiveDate) -> Vec<Arc<BreedingRecord>> {
    let mut due: Vec<_> = records
        .iter()
        .filter(|r| r.status == BreedingStatus::Pregnant)
        .filter(|r| {
            let days = (r.due_date - today).num_days();
            (0..=DUE_SOON_DAYS).contains(&days)
        })
        .cloned()
        .collect();
    due.sort_by_key(|r| r.due_date);
    due
}

pub fn count_by_status(records: &[Arc<BreedingRecord>]) -> BTreeMap<BreedingStatus, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.status).or_insert(0) += 1;
    }
    counts
}

/// Delivered share of concluded pregnancies (Delivered + Unsuccessful).
pub fn success_rate(records: &[Arc<BreedingRecord>]) -> Option<f64> {
    let delivered = records
        .iter()
        .filter(|r| r.status == BreedingStatus::Delivered)
        .count();
    let unsuccessful = records
        .iter()
        .filter(|r| r.status == BreedingStatus::Unsuccessful)
        .count();
    percentage(delivered, delivered + unsuccessful)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::insights::fixtures::{breeding, date};

    #[test]
    fn due_soon_is_inclusive_and_excludes_past() {
        let today = date(2024, 6, 10);
        let records = vec![
            breeding("B001", date(2024, 6, 24), BreedingStatus::Pregnant),
            breeding("B002", date(2024, 6, 25), BreedingStatus::Pregnant),
            breeding("B003", date(2024, 6, 9), BreedingStatus::Pregnant),
            breeding("B004", date(2024, 6, 10), BreedingStatus::Pregnant),
            breeding("B005", date(2024, 6, 12), BreedingStatus::Delivered),
        ];

        let ids: Vec<String> = due_soon(&records, today).iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, ["B004", "B001"]);
    }

    #[test]
    fn success_rate_ignores_ongoing_pregnancies() {
        let d = date(2024, 1, 1);
        let records = vec![
            breeding("B001", d, BreedingStatus::Delivered),
            breeding("B002", d, BreedingStatus::Delivered),
            breeding("B003", d, BreedingStatus::Delivered),
            breeding("B004", d, BreedingStatus::Unsuccessful),
            breeding("B005", d, BreedingStatus::Pregnant),
        ];
        assert_eq!(success_rate(&records), Some(75.0));
        assert_eq!(success_rate(&records[4..]), None);
    }
}
