// ── Health record domain types ──

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::entity_id::{EntityId, EntityKind};
use super::Entity;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum HealthRecordType {
    Vaccination,
    Treatment,
    Checkup,
    Medication,
    Surgery,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum HealthStatus {
    Scheduled,
    Ongoing,
    Completed,
}

impl HealthStatus {
    pub fn is_open(self) -> bool {
        !matches!(self, Self::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub id: EntityId,
    /// References an [`Animal`](super::Animal); may dangle.
    pub animal_id: EntityId,
    pub record_type: HealthRecordType,
    pub description: String,
    pub date: NaiveDate,
    pub veterinarian: String,
    pub status: HealthStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_due: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for HealthRecord {
    const KIND: EntityKind = EntityKind::HealthRecord;

    fn id(&self) -> &EntityId {
        &self.id
    }
}
