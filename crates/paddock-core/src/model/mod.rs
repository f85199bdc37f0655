// ── Domain model ──
//
// Canonical types mirrored from the backend. Field names follow the
// backend's camelCase JSON; enums carry their exact display strings.

pub mod animal;
pub mod breeding;
pub mod entity_id;
pub mod feeding;
pub mod health;
pub mod inventory;
pub mod settings;
pub mod staff;

pub use animal::{Animal, AnimalStatus, Gender};
pub use breeding::{BreedingRecord, BreedingStatus};
pub use entity_id::{EntityId, EntityKind};
pub use feeding::{FeedingFrequency, FeedingStatus, FeedingTask};
pub use health::{HealthRecord, HealthRecordType, HealthStatus};
pub use inventory::{InventoryCategory, InventoryItem, StockStatus};
pub use settings::{FacilitySettings, NotificationPreference, NotificationPreferences};
pub use staff::{StaffMember, StaffRole, StaffStatus};

/// A record held in one of the store's collections.
pub trait Entity: Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> &EntityId;
}
