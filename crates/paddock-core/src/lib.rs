//! Client-side state layer between `paddock-api` and the screens.
//!
//! This crate owns the domain model, the reactive store, and the derived
//! aggregates for the paddock workspace:
//!
//! - **[`Facility`]**: the store facade. [`load()`](Facility::load)
//!   fetches every collection concurrently and degrades per source;
//!   `add_*` / `update_*` / `delete_*` are write-through round trips
//!   that touch local state only after the backend confirms.
//!
//! - **[`DataStore`]**: ordered per-type collections published as
//!   `Arc<Vec<Arc<T>>>` snapshots over `tokio::sync::watch`.
//!
//! - **[`EntityStream<T>`]**: subscription handle vended by the
//!   `DataStore`, with `current()` / `latest()` / `changed()`.
//!
//! - **[`insights`]**: pure functions computing dashboard, inventory,
//!   breeding, and report aggregates from a [`FacilitySnapshot`].
//!
//! - **[`validate`]**: the local form-validation gate applied to every
//!   create request, plus the login form.

pub mod config;
pub mod error;
pub mod facility;
pub mod insights;
pub mod model;
pub mod requests;
pub mod store;
pub mod stream;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{FacilityConfig, TlsVerification};
pub use error::CoreError;
pub use facility::{CascadeReport, Facility, LoadState, UNKNOWN_ANIMAL};
pub use requests::*;
pub use store::{DataStore, FacilitySnapshot, LoadReport, LoadSource};
pub use stream::EntityStream;
pub use validate::{LoginForm, Validate};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Animal, AnimalStatus, BreedingRecord, BreedingStatus, Entity, EntityId, EntityKind,
    FacilitySettings, FeedingFrequency, FeedingStatus, FeedingTask, Gender, HealthRecord,
    HealthRecordType, HealthStatus, InventoryCategory, InventoryItem, NotificationPreference,
    NotificationPreferences, StaffMember, StaffRole, StaffStatus, StockStatus,
};
