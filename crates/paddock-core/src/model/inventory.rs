// ── Inventory domain types ──

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
pub enum InventoryCategory {
    Food,
    Medicine,
    Equipment,
    Supplies,
}

/// Stock level, derived by the backend from quantity and reorder level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    #[strum(serialize = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    #[strum(serialize = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    #[strum(serialize = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    /// The backend's derivation rule. The client only uses it to preview
    /// a status locally; the stored value is always the server's.
    pub fn derive(quantity: f64, reorder_level: f64) -> Self {
        if quantity <= 0.0 {
            Self::OutOfStock
        } else if quantity <= reorder_level {
            Self::LowStock
        } else {
            Self::InStock
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: EntityId,
    pub name: String,
    pub category: InventoryCategory,
    pub quantity: f64,
    pub unit: String,
    pub reorder_level: f64,
    pub cost_per_unit: f64,
    pub status: StockStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl InventoryItem {
    pub fn total_value(&self) -> f64 {
        self.quantity * self.cost_per_unit
    }

    pub fn needs_reorder(&self) -> bool {
        self.status != StockStatus::InStock
    }
}

impl Entity for InventoryItem {
    const KIND: EntityKind = EntityKind::InventoryItem;

    fn id(&self) -> &EntityId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_matches_backend_thresholds() {
        assert_eq!(StockStatus::derive(0.0, 5.0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::derive(-1.0, 5.0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::derive(5.0, 5.0), StockStatus::LowStock);
        assert_eq!(StockStatus::derive(2.0, 5.0), StockStatus::LowStock);
        assert_eq!(StockStatus::derive(5.5, 5.0), StockStatus::InStock);
    }
}
