// ── Feeding schedule aggregates ──

use std::collections::BTreeMap;
use std::sync::Arc;

use super::percentage;
use crate::model::{FeedingStatus, FeedingTask};

pub fn count_by_status(tasks: &[Arc<FeedingTask>]) -> BTreeMap<FeedingStatus, usize> {
    let mut counts = BTreeMap::new();
    for task in tasks {
        *counts.entry(task.status).or_insert(0) += 1;
    }
    counts
}

pub fn pending(tasks: &[Arc<FeedingTask>]) -> usize {
    tasks
        .iter()
        .filter(|t| t.status == FeedingStatus::Pending)
        .count()
}

/// Share of tasks marked Completed, as a percentage.
pub fn completion_rate(tasks: &[Arc<FeedingTask>]) -> Option<f64> {
    let done = tasks
        .iter()
        .filter(|t| t.status == FeedingStatus::Completed)
        .count();
    percentage(done, tasks.len())
}

/// Tasks in time-of-day order. Times are `HH:MM` text, so a plain
/// string sort is chronological.
pub fn daily_schedule(tasks: &[Arc<FeedingTask>]) -> Vec<Arc<FeedingTask>> {
    let mut ordered = tasks.to_vec();
    ordered.sort_by(|a, b| a.time.cmp(&b.time));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::fixtures::feeding;

    #[test]
    fn completion_rate_over_all_tasks() {
        let tasks = vec![
            feeding("F001", "A001", FeedingStatus::Completed),
            feeding("F002", "A001", FeedingStatus::Pending),
            feeding("F003", "A002", FeedingStatus::Missed),
            feeding("F004", "A002", FeedingStatus::Completed),
        ];
        assert_eq!(completion_rate(&tasks), Some(50.0));
        assert_eq!(pending(&tasks), 1);
        assert_eq!(completion_rate(&[]), None);
    }
}
