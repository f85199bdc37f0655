// ── Central reactive data store ──
//
// Canonical in-memory copy of every collection plus the settings
// singleton. Mutations are broadcast to subscribers via `watch` channels.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use super::collection::EntityCollection;
use crate::insights::ReportFilters;
use crate::model::{
    Animal, BreedingRecord, EntityId, FacilitySettings, FeedingTask, HealthRecord, InventoryItem,
    StaffMember,
};
use crate::stream::EntityStream;

/// Central reactive store for all facility entities.
///
/// Only the owning [`Facility`](crate::Facility) mutates it; everyone
/// else reads `Arc` snapshots.
pub struct DataStore {
    pub(crate) animals: EntityCollection<Animal>,
    pub(crate) health_records: EntityCollection<HealthRecord>,
    pub(crate) feeding_tasks: EntityCollection<FeedingTask>,
    pub(crate) breeding_records: EntityCollection<BreedingRecord>,
    pub(crate) inventory: EntityCollection<InventoryItem>,
    pub(crate) staff: EntityCollection<StaffMember>,
    pub(crate) settings: watch::Sender<Arc<FacilitySettings>>,
    /// Whether `settings` holds a copy the backend sent, rather than the
    /// built-in default or a copy the last load could not refresh.
    settings_confirmed: AtomicBool,
    pub(crate) report_filters: watch::Sender<ReportFilters>,
    pub(crate) last_load: watch::Sender<Option<DateTime<Utc>>>,
}

/// Point-in-time view of every collection, the input to the
/// [`insights`](crate::insights) functions.
#[derive(Debug, Clone)]
pub struct FacilitySnapshot {
    pub animals: Arc<Vec<Arc<Animal>>>,
    pub health_records: Arc<Vec<Arc<HealthRecord>>>,
    pub feeding_tasks: Arc<Vec<Arc<FeedingTask>>>,
    pub breeding_records: Arc<Vec<Arc<BreedingRecord>>>,
    pub inventory: Arc<Vec<Arc<InventoryItem>>>,
    pub staff: Arc<Vec<Arc<StaffMember>>>,
    pub settings: Arc<FacilitySettings>,
}

impl DataStore {
    pub fn new() -> Self {
        let (settings, _) = watch::channel(Arc::new(FacilitySettings::default()));
        let (report_filters, _) = watch::channel(ReportFilters::default());
        let (last_load, _) = watch::channel(None);

        Self {
            animals: EntityCollection::new(),
            health_records: EntityCollection::new(),
            feeding_tasks: EntityCollection::new(),
            breeding_records: EntityCollection::new(),
            inventory: EntityCollection::new(),
            staff: EntityCollection::new(),
            settings,
            settings_confirmed: AtomicBool::new(false),
            report_filters,
            last_load,
        }
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn animals_snapshot(&self) -> Arc<Vec<Arc<Animal>>> {
        self.animals.snapshot()
    }

    pub fn health_records_snapshot(&self) -> Arc<Vec<Arc<HealthRecord>>> {
        self.health_records.snapshot()
    }

    pub fn feeding_tasks_snapshot(&self) -> Arc<Vec<Arc<FeedingTask>>> {
        self.feeding_tasks.snapshot()
    }

    pub fn breeding_records_snapshot(&self) -> Arc<Vec<Arc<BreedingRecord>>> {
        self.breeding_records.snapshot()
    }

    pub fn inventory_snapshot(&self) -> Arc<Vec<Arc<InventoryItem>>> {
        self.inventory.snapshot()
    }

    pub fn staff_snapshot(&self) -> Arc<Vec<Arc<StaffMember>>> {
        self.staff.snapshot()
    }

    pub fn settings(&self) -> Arc<FacilitySettings> {
        self.settings.borrow().clone()
    }

    pub fn snapshot_all(&self) -> FacilitySnapshot {
        FacilitySnapshot {
            animals: self.animals.snapshot(),
            health_records: self.health_records.snapshot(),
            feeding_tasks: self.feeding_tasks.snapshot(),
            breeding_records: self.breeding_records.snapshot(),
            inventory: self.inventory.snapshot(),
            staff: self.staff.snapshot(),
            settings: self.settings(),
        }
    }

    // ── Single-entity lookups ────────────────────────────────────────

    pub fn animal_by_id(&self, id: &EntityId) -> Option<Arc<Animal>> {
        self.animals.get(id)
    }

    pub fn health_record_by_id(&self, id: &EntityId) -> Option<Arc<HealthRecord>> {
        self.health_records.get(id)
    }

    pub fn feeding_task_by_id(&self, id: &EntityId) -> Option<Arc<FeedingTask>> {
        self.feeding_tasks.get(id)
    }

    pub fn breeding_record_by_id(&self, id: &EntityId) -> Option<Arc<BreedingRecord>> {
        self.breeding_records.get(id)
    }

    pub fn inventory_item_by_id(&self, id: &EntityId) -> Option<Arc<InventoryItem>> {
        self.inventory.get(id)
    }

    pub fn staff_member_by_id(&self, id: &EntityId) -> Option<Arc<StaffMember>> {
        self.staff.get(id)
    }

    // ── Count accessors ──────────────────────────────────────────────

    pub fn animal_count(&self) -> usize {
        self.animals.len()
    }

    pub fn health_record_count(&self) -> usize {
        self.health_records.len()
    }

    pub fn feeding_task_count(&self) -> usize {
        self.feeding_tasks.len()
    }

    pub fn breeding_record_count(&self) -> usize {
        self.breeding_records.len()
    }

    pub fn inventory_count(&self) -> usize {
        self.inventory.len()
    }

    pub fn staff_count(&self) -> usize {
        self.staff.len()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_animals(&self) -> EntityStream<Animal> {
        EntityStream::new(self.animals.subscribe())
    }

    pub fn subscribe_health_records(&self) -> EntityStream<HealthRecord> {
        EntityStream::new(self.health_records.subscribe())
    }

    pub fn subscribe_feeding_tasks(&self) -> EntityStream<FeedingTask> {
        EntityStream::new(self.feeding_tasks.subscribe())
    }

    pub fn subscribe_breeding_records(&self) -> EntityStream<BreedingRecord> {
        EntityStream::new(self.breeding_records.subscribe())
    }

    pub fn subscribe_inventory(&self) -> EntityStream<InventoryItem> {
        EntityStream::new(self.inventory.subscribe())
    }

    pub fn subscribe_staff(&self) -> EntityStream<StaffMember> {
        EntityStream::new(self.staff.subscribe())
    }

    // ── UI preferences ───────────────────────────────────────────────

    pub fn report_filters(&self) -> ReportFilters {
        *self.report_filters.borrow()
    }

    // ── Metadata ─────────────────────────────────────────────────────

    pub fn last_load(&self) -> Option<DateTime<Utc>> {
        *self.last_load.borrow()
    }

    /// False until the backend has answered for the settings, and again
    /// after a load whose settings call failed.
    pub fn settings_confirmed(&self) -> bool {
        self.settings_confirmed.load(Ordering::Acquire)
    }

    // ── Crate-internal mutation ──────────────────────────────────────

    /// Store a settings object the backend returned.
    pub(crate) fn set_settings(&self, settings: FacilitySettings) {
        self.settings.send_modify(|s| *s = Arc::new(settings));
        self.settings_confirmed.store(true, Ordering::Release);
    }

    /// Keep the held settings but stop trusting them as current.
    pub(crate) fn mark_settings_stale(&self) {
        self.settings_confirmed.store(false, Ordering::Release);
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}
