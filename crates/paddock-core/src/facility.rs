// ── Facility store ──
//
// Owns the REST client and the DataStore, and is the only writer of
// the store. Every mutation is write-through: the request goes out, and
// local state changes only once the backend has confirmed it.

use std::sync::Arc;

use paddock_api::types::HealthStatus as BackendHealth;
use paddock_api::{FacilityClient, Resource};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::FacilityConfig;
use crate::error::CoreError;
use crate::insights::ReportFilters;
use crate::model::{
    Animal, BreedingRecord, Entity, EntityId, FacilitySettings, FeedingTask, HealthRecord,
    InventoryItem, NotificationPreference, StaffMember,
};
use crate::requests::{
    CreateAnimalRequest, CreateBreedingRecordRequest, CreateFeedingTaskRequest,
    CreateHealthRecordRequest, CreateInventoryItemRequest, CreateStaffMemberRequest,
    UpdateAnimalRequest, UpdateBreedingRecordRequest, UpdateFeedingTaskRequest,
    UpdateHealthRecordRequest, UpdateInventoryItemRequest, UpdateSettingsRequest,
    UpdateStaffMemberRequest,
};
use crate::store::{DataStore, EntityCollection, LoadReport, LoadSnapshot, LoadSource};
use crate::validate::Validate;

/// Display name for a reference that resolves to no known animal.
pub const UNKNOWN_ANIMAL: &str = "Unknown";

// ── LoadState ────────────────────────────────────────────────────────

/// Initial-load progress observable by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    /// Every load source has settled, successfully or not.
    Loaded,
}

/// Local records dropped alongside a deleted animal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub health_records: usize,
    pub feeding_tasks: usize,
    pub breeding_records: usize,
}

// ── Facility ─────────────────────────────────────────────────────────

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<FacilityInner>`. The composition root
/// builds one and passes it to every screen.
#[derive(Clone)]
pub struct Facility {
    inner: Arc<FacilityInner>,
}

struct FacilityInner {
    config: FacilityConfig,
    api: FacilityClient,
    store: Arc<DataStore>,
    load_state: watch::Sender<LoadState>,
}

impl Facility {
    /// Build a facility from configuration. Does NOT load; call
    /// [`load()`](Self::load) to populate the store.
    pub fn new(config: FacilityConfig) -> Result<Self, CoreError> {
        let api = FacilityClient::new(config.url.as_str(), &config.transport())?;
        Ok(Self::with_client(config, api))
    }

    /// Build around an existing client.
    pub fn with_client(config: FacilityConfig, api: FacilityClient) -> Self {
        let (load_state, _) = watch::channel(LoadState::Idle);
        Self {
            inner: Arc::new(FacilityInner {
                config,
                api,
                store: Arc::new(DataStore::new()),
                load_state,
            }),
        }
    }

    pub fn config(&self) -> &FacilityConfig {
        &self.inner.config
    }

    /// Access the underlying DataStore (read-only for consumers).
    pub fn store(&self) -> &Arc<DataStore> {
        &self.inner.store
    }

    pub fn load_state(&self) -> LoadState {
        *self.inner.load_state.borrow()
    }

    pub fn subscribe_load_state(&self) -> watch::Receiver<LoadState> {
        self.inner.load_state.subscribe()
    }

    // ── Loading ──────────────────────────────────────────────────────

    /// Fetch every collection and the settings concurrently.
    ///
    /// Never fails: a collection that errors is logged and degrades to
    /// empty. Failed settings keep whatever copy is already held. The
    /// returned report names the degraded sources.
    pub async fn load(&self) -> LoadReport {
        self.inner.load_state.send_replace(LoadState::Loading);
        let api = &self.inner.api;

        let (animals, health_records, feeding_tasks, breeding_records, inventory, staff, settings) =
            tokio::join!(
                api.list::<Animal>(Resource::Animals),
                api.list::<HealthRecord>(Resource::HealthRecords),
                api.list::<FeedingTask>(Resource::FeedingTasks),
                api.list::<BreedingRecord>(Resource::BreedingRecords),
                api.list::<InventoryItem>(Resource::Inventory),
                api.list::<StaffMember>(Resource::Staff),
                api.get_settings::<FacilitySettings>(),
            );

        let snapshot = LoadSnapshot {
            animals: settle(LoadSource::Animals, animals),
            health_records: settle(LoadSource::HealthRecords, health_records),
            feeding_tasks: settle(LoadSource::FeedingTasks, feeding_tasks),
            breeding_records: settle(LoadSource::BreedingRecords, breeding_records),
            inventory: settle(LoadSource::Inventory, inventory),
            staff: settle(LoadSource::Staff, staff),
            settings: settle(LoadSource::Settings, settings),
        };

        let report = self.inner.store.apply_load(snapshot);
        self.inner.load_state.send_replace(LoadState::Loaded);

        let store = &self.inner.store;
        info!(
            animals = store.animal_count(),
            health_records = store.health_record_count(),
            feeding_tasks = store.feeding_task_count(),
            breeding_records = store.breeding_record_count(),
            inventory = store.inventory_count(),
            staff = store.staff_count(),
            degraded = report.failed.len(),
            "facility data loaded"
        );
        report
    }

    /// Re-run the full load, replacing every collection.
    pub async fn refresh(&self) -> LoadReport {
        self.load().await
    }

    /// Backend liveness probe.
    pub async fn check_health(&self) -> Result<BackendHealth, CoreError> {
        self.inner.api.health().await.map_err(|e| self.lift(e))
    }

    // ── Read helpers ─────────────────────────────────────────────────

    /// Name of the animal with this id, or [`UNKNOWN_ANIMAL`] for a
    /// dangling reference.
    pub fn animal_name(&self, id: &EntityId) -> String {
        self.inner
            .store
            .animal_by_id(id)
            .map_or_else(|| UNKNOWN_ANIMAL.to_owned(), |a| a.name.clone())
    }

    pub fn report_filters(&self) -> ReportFilters {
        self.inner.store.report_filters()
    }

    /// Session-only preference; never sent to the backend.
    pub fn set_report_filters(&self, filters: ReportFilters) {
        self.inner.store.report_filters.send_replace(filters);
    }

    // ── Animals ──────────────────────────────────────────────────────

    pub async fn add_animal(&self, req: &CreateAnimalRequest) -> Result<Arc<Animal>, CoreError> {
        self.create_in(Resource::Animals, |s| &s.animals, req).await
    }

    pub async fn update_animal(
        &self,
        id: &EntityId,
        req: &UpdateAnimalRequest,
    ) -> Result<Arc<Animal>, CoreError> {
        self.update_in(Resource::Animals, |s| &s.animals, id, req)
            .await
    }

    /// Delete an animal, then drop every local health record, feeding
    /// task and breeding record that references it. The backend keeps
    /// its copies of those records.
    pub async fn delete_animal(&self, id: &EntityId) -> Result<CascadeReport, CoreError> {
        self.delete_in(Resource::Animals, |s| &s.animals, id).await?;

        let store = &self.inner.store;
        let report = CascadeReport {
            health_records: store.health_records.retain(|r| r.animal_id != *id),
            feeding_tasks: store.feeding_tasks.retain(|t| t.animal_id != *id),
            breeding_records: store.breeding_records.retain(|r| !r.involves(id)),
        };
        info!(
            animal = %id,
            health_records = report.health_records,
            feeding_tasks = report.feeding_tasks,
            breeding_records = report.breeding_records,
            "removed dependent records locally"
        );
        Ok(report)
    }

    // ── Health records ───────────────────────────────────────────────

    pub async fn add_health_record(
        &self,
        req: &CreateHealthRecordRequest,
    ) -> Result<Arc<HealthRecord>, CoreError> {
        self.create_in(Resource::HealthRecords, |s| &s.health_records, req)
            .await
    }

    pub async fn update_health_record(
        &self,
        id: &EntityId,
        req: &UpdateHealthRecordRequest,
    ) -> Result<Arc<HealthRecord>, CoreError> {
        self.update_in(Resource::HealthRecords, |s| &s.health_records, id, req)
            .await
    }

    pub async fn delete_health_record(&self, id: &EntityId) -> Result<(), CoreError> {
        self.delete_in(Resource::HealthRecords, |s| &s.health_records, id)
            .await
    }

    // ── Feeding tasks ────────────────────────────────────────────────

    /// An empty `animal_name` is filled from the animal registry
    /// (or [`UNKNOWN_ANIMAL`]) before sending.
    pub async fn add_feeding_task(
        &self,
        req: &CreateFeedingTaskRequest,
    ) -> Result<Arc<FeedingTask>, CoreError> {
        if req.animal_name.trim().is_empty() {
            let mut named = req.clone();
            named.animal_name = self.animal_name(&req.animal_id);
            return self
                .create_in(Resource::FeedingTasks, |s| &s.feeding_tasks, &named)
                .await;
        }
        self.create_in(Resource::FeedingTasks, |s| &s.feeding_tasks, req)
            .await
    }

    /// Re-pointing a task at another animal without naming it captures
    /// the new animal's current name.
    pub async fn update_feeding_task(
        &self,
        id: &EntityId,
        req: &UpdateFeedingTaskRequest,
    ) -> Result<Arc<FeedingTask>, CoreError> {
        if let (Some(animal_id), None) = (&req.animal_id, &req.animal_name) {
            let mut named = req.clone();
            named.animal_name = Some(self.animal_name(animal_id));
            return self
                .update_in(Resource::FeedingTasks, |s| &s.feeding_tasks, id, &named)
                .await;
        }
        self.update_in(Resource::FeedingTasks, |s| &s.feeding_tasks, id, req)
            .await
    }

    pub async fn delete_feeding_task(&self, id: &EntityId) -> Result<(), CoreError> {
        self.delete_in(Resource::FeedingTasks, |s| &s.feeding_tasks, id)
            .await
    }

    // ── Breeding records ─────────────────────────────────────────────

    pub async fn add_breeding_record(
        &self,
        req: &CreateBreedingRecordRequest,
    ) -> Result<Arc<BreedingRecord>, CoreError> {
        self.create_in(Resource::BreedingRecords, |s| &s.breeding_records, req)
            .await
    }

    pub async fn update_breeding_record(
        &self,
        id: &EntityId,
        req: &UpdateBreedingRecordRequest,
    ) -> Result<Arc<BreedingRecord>, CoreError> {
        self.update_in(Resource::BreedingRecords, |s| &s.breeding_records, id, req)
            .await
    }

    pub async fn delete_breeding_record(&self, id: &EntityId) -> Result<(), CoreError> {
        self.delete_in(Resource::BreedingRecords, |s| &s.breeding_records, id)
            .await
    }

    // ── Inventory ────────────────────────────────────────────────────

    /// The stored item carries the status the backend derived.
    pub async fn add_inventory_item(
        &self,
        req: &CreateInventoryItemRequest,
    ) -> Result<Arc<InventoryItem>, CoreError> {
        self.create_in(Resource::Inventory, |s| &s.inventory, req)
            .await
    }

    pub async fn update_inventory_item(
        &self,
        id: &EntityId,
        req: &UpdateInventoryItemRequest,
    ) -> Result<Arc<InventoryItem>, CoreError> {
        self.update_in(Resource::Inventory, |s| &s.inventory, id, req)
            .await
    }

    pub async fn delete_inventory_item(&self, id: &EntityId) -> Result<(), CoreError> {
        self.delete_in(Resource::Inventory, |s| &s.inventory, id)
            .await
    }

    // ── Staff ────────────────────────────────────────────────────────

    pub async fn add_staff_member(
        &self,
        req: &CreateStaffMemberRequest,
    ) -> Result<Arc<StaffMember>, CoreError> {
        self.create_in(Resource::Staff, |s| &s.staff, req).await
    }

    pub async fn update_staff_member(
        &self,
        id: &EntityId,
        req: &UpdateStaffMemberRequest,
    ) -> Result<Arc<StaffMember>, CoreError> {
        self.update_in(Resource::Staff, |s| &s.staff, id, req).await
    }

    pub async fn delete_staff_member(&self, id: &EntityId) -> Result<(), CoreError> {
        self.delete_in(Resource::Staff, |s| &s.staff, id).await
    }

    // ── Settings ─────────────────────────────────────────────────────

    /// Merge-update the settings singleton and keep the server's copy.
    pub async fn update_settings(
        &self,
        req: &UpdateSettingsRequest,
    ) -> Result<Arc<FacilitySettings>, CoreError> {
        req.validate()?;
        self.put_settings(req).await
    }

    /// Flip one notification flag. The whole settings object goes back
    /// to the backend so every other preference is re-sent unchanged.
    ///
    /// Settings the backend has not confirmed (never loaded, or the last
    /// load failed for them) are fetched again first, and the toggle fails
    /// if that fetch does; a stale or built-in copy is never written back.
    pub async fn toggle_notification(
        &self,
        pref: NotificationPreference,
    ) -> Result<Arc<FacilitySettings>, CoreError> {
        let current = self.confirmed_settings().await?;
        let mut req = UpdateSettingsRequest::from(current.as_ref());
        req.notification_preferences = Some(current.notification_preferences.toggled(pref));
        debug!(preference = %pref, "toggling notification preference");
        self.put_settings(&req).await
    }

    async fn confirmed_settings(&self) -> Result<Arc<FacilitySettings>, CoreError> {
        let store = &self.inner.store;
        if !store.settings_confirmed() {
            debug!("held settings are unconfirmed; fetching before write");
            let fresh: FacilitySettings = self
                .inner
                .api
                .get_settings()
                .await
                .map_err(|e| self.lift(e))?;
            store.set_settings(fresh);
        }
        Ok(store.settings())
    }

    async fn put_settings(
        &self,
        req: &UpdateSettingsRequest,
    ) -> Result<Arc<FacilitySettings>, CoreError> {
        ensure_changes(req)?;
        let updated: FacilitySettings = self
            .inner
            .api
            .update_settings(req)
            .await
            .map_err(|e| self.lift(e))?;
        self.inner.store.set_settings(updated);
        debug!("settings updated");
        Ok(self.inner.store.settings())
    }

    // ── Write-through helpers ────────────────────────────────────────

    async fn create_in<T, B>(
        &self,
        resource: Resource,
        collection: impl Fn(&DataStore) -> &EntityCollection<T>,
        req: &B,
    ) -> Result<Arc<T>, CoreError>
    where
        T: Entity + DeserializeOwned,
        B: Validate + Serialize + Sync,
    {
        req.validate()?;
        let created: T = self
            .inner
            .api
            .create(resource, req)
            .await
            .map_err(|e| self.lift(e))?;
        debug!(id = %created.id(), "created {}", resource.label());
        Ok(collection(&self.inner.store).append(created))
    }

    async fn update_in<T, B>(
        &self,
        resource: Resource,
        collection: impl Fn(&DataStore) -> &EntityCollection<T>,
        id: &EntityId,
        req: &B,
    ) -> Result<Arc<T>, CoreError>
    where
        T: Entity + DeserializeOwned,
        B: Validate + Serialize + Sync,
    {
        ensure_changes(req)?;
        req.validate()?;
        let updated: T = self
            .inner
            .api
            .update(resource, id.as_str(), req)
            .await
            .map_err(|e| self.lift(e))?;

        match collection(&self.inner.store).replace(updated.clone()) {
            Some(stored) => Ok(stored),
            None => {
                // Deleted locally while the update was in flight.
                debug!(%id, "update resolved for a {} no longer held; ignored", resource.label());
                Ok(Arc::new(updated))
            }
        }
    }

    async fn delete_in<T: Entity>(
        &self,
        resource: Resource,
        collection: impl Fn(&DataStore) -> &EntityCollection<T>,
        id: &EntityId,
    ) -> Result<(), CoreError> {
        let resp = self
            .inner
            .api
            .delete(resource, id.as_str())
            .await
            .map_err(|e| self.lift(e))?;
        collection(&self.inner.store).remove(id);
        debug!(%id, message = %resp.message, "deleted {}", resource.label());
        Ok(())
    }

    /// Translate an API error, filling in the configured timeout.
    fn lift(&self, err: paddock_api::Error) -> CoreError {
        match CoreError::from(err) {
            CoreError::Timeout { .. } => CoreError::Timeout {
                timeout_secs: self.inner.config.timeout.map_or(0, |t| t.as_secs()),
            },
            other => other,
        }
    }
}

/// Log a failed load source and degrade it to `None`.
fn settle<T>(source: LoadSource, result: Result<T, paddock_api::Error>) -> Option<T> {
    match result {
        Ok(data) => Some(data),
        Err(e) => {
            warn!(%source, error = %e, "load failed; continuing without it");
            None
        }
    }
}

/// Reject an update that would send an empty object.
fn ensure_changes<B: Serialize>(req: &B) -> Result<(), CoreError> {
    let value = serde_json::to_value(req).map_err(|e| CoreError::Internal(e.to_string()))?;
    if value.as_object().is_some_and(serde_json::Map::is_empty) {
        return Err(CoreError::validation("No fields to update"));
    }
    Ok(())
}
