// ── Staff aggregates ──

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::model::{StaffMember, StaffRole, StaffStatus};

pub fn count_by_status(staff: &[Arc<StaffMember>]) -> BTreeMap<StaffStatus, usize> {
    let mut counts = BTreeMap::new();
    for member in staff {
        *counts.entry(member.status).or_insert(0) += 1;
    }
    counts
}

pub fn count_by_role(staff: &[Arc<StaffMember>]) -> BTreeMap<StaffRole, usize> {
    let mut counts = BTreeMap::new();
    for member in staff {
        *counts.entry(member.role).or_insert(0) += 1;
    }
    counts
}

pub fn active(staff: &[Arc<StaffMember>]) -> usize {
    staff
        .iter()
        .filter(|m| m.status == StaffStatus::Active)
        .count()
}
