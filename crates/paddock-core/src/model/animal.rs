// ── Animal domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::entity_id::{EntityId, EntityKind};
use super::Entity;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

/// Care status shown on the animal registry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum AnimalStatus {
    Healthy,
    #[serde(rename = "Under Care")]
    #[strum(serialize = "Under Care")]
    UnderCare,
    Quarantine,
    Breeding,
    Inactive,
}

impl AnimalStatus {
    /// Statuses that need a caretaker's attention.
    pub fn needs_attention(self) -> bool {
        matches!(self, Self::UnderCare | Self::Quarantine)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: EntityId,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: u32,
    pub gender: Gender,
    /// Body weight in kilograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub status: AnimalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Animal {
    const KIND: EntityKind = EntityKind::Animal;

    fn id(&self) -> &EntityId {
        &self.id
    }
}
