// ── Feeding schedule domain types ──

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
pub enum FeedingFrequency {
    #[serde(rename = "Once Daily")]
    #[strum(serialize = "Once Daily")]
    OnceDaily,
    #[serde(rename = "Twice Daily")]
    #[strum(serialize = "Twice Daily")]
    TwiceDaily,
    #[serde(rename = "Three Times Daily")]
    #[strum(serialize = "Three Times Daily")]
    ThreeTimesDaily,
    Weekly,
    #[serde(rename = "As Needed")]
    #[strum(serialize = "As Needed")]
    AsNeeded,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum FeedingStatus {
    Pending,
    Completed,
    Missed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingTask {
    pub id: EntityId,
    /// References an [`Animal`](super::Animal); may dangle.
    pub animal_id: EntityId,
    /// Animal name captured when the task was written; not kept in sync.
    pub animal_name: String,
    pub food_type: String,
    /// Free text, e.g. "2 kg" or "1 scoop".
    pub quantity: String,
    /// Time of day, e.g. "08:00".
    pub time: String,
    pub frequency: FeedingFrequency,
    pub status: FeedingStatus,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for FeedingTask {
    const KIND: EntityKind = EntityKind::FeedingTask;

    fn id(&self) -> &EntityId {
        &self.id
    }
}
