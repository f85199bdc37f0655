// ── Breeding record domain types ──

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
pub enum BreedingStatus {
    Pregnant,
    Delivered,
    Unsuccessful,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedingRecord {
    pub id: EntityId,
    pub mother_id: EntityId,
    pub father_id: EntityId,
    pub mating_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_litter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_litter: Option<String>,
    pub status: BreedingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BreedingRecord {
    /// Whether either parent is the given animal.
    pub fn involves(&self, animal_id: &EntityId) -> bool {
        self.mother_id == *animal_id || self.father_id == *animal_id
    }
}

impl Entity for BreedingRecord {
    const KIND: EntityKind = EntityKind::BreedingRecord;

    fn id(&self) -> &EntityId {
        &self.id
    }
}
