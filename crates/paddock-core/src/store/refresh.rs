// ── Load application logic ──
//
// Applies the result of a full load into the DataStore. Each source
// settles independently: a failed collection arrives here as `None` and
// degrades to empty. Failed settings leave the held copy in place (the
// built-in default before anything loaded) and mark it stale.

use chrono::Utc;
use strum::{Display, EnumIter};

use super::DataStore;
use crate::model::{
    Animal, BreedingRecord, FacilitySettings, FeedingTask, HealthRecord, InventoryItem,
    StaffMember,
};

/// One of the seven calls issued by a full load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum LoadSource {
    Animals,
    HealthRecords,
    FeedingTasks,
    BreedingRecords,
    Inventory,
    Staff,
    Settings,
}

/// Outcome of a full load. The load itself never fails; this lists the
/// sources that fell back to empty data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub failed: Vec<LoadSource>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Settled results of every load source.
#[derive(Debug, Default)]
pub(crate) struct LoadSnapshot {
    pub animals: Option<Vec<Animal>>,
    pub health_records: Option<Vec<HealthRecord>>,
    pub feeding_tasks: Option<Vec<FeedingTask>>,
    pub breeding_records: Option<Vec<BreedingRecord>>,
    pub inventory: Option<Vec<InventoryItem>>,
    pub staff: Option<Vec<StaffMember>>,
    pub settings: Option<FacilitySettings>,
}

impl DataStore {
    /// Replace every collection with a settled load.
    pub(crate) fn apply_load(&self, snapshot: LoadSnapshot) -> LoadReport {
        let mut failed = Vec::new();

        self.animals
            .replace_all(settle(&mut failed, LoadSource::Animals, snapshot.animals));
        self.health_records.replace_all(settle(
            &mut failed,
            LoadSource::HealthRecords,
            snapshot.health_records,
        ));
        self.feeding_tasks.replace_all(settle(
            &mut failed,
            LoadSource::FeedingTasks,
            snapshot.feeding_tasks,
        ));
        self.breeding_records.replace_all(settle(
            &mut failed,
            LoadSource::BreedingRecords,
            snapshot.breeding_records,
        ));
        self.inventory
            .replace_all(settle(&mut failed, LoadSource::Inventory, snapshot.inventory));
        self.staff
            .replace_all(settle(&mut failed, LoadSource::Staff, snapshot.staff));

        if let Some(settings) = snapshot.settings {
            self.set_settings(settings);
        } else {
            failed.push(LoadSource::Settings);
            self.mark_settings_stale();
        }

        self.last_load.send_replace(Some(Utc::now()));
        LoadReport { failed }
    }
}

fn settle<T>(failed: &mut Vec<LoadSource>, source: LoadSource, data: Option<Vec<T>>) -> Vec<T> {
    if data.is_none() {
        failed.push(source);
    }
    data.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sources_degrade_to_empty() {
        let store = DataStore::new();
        let report = store.apply_load(LoadSnapshot {
            animals: Some(Vec::new()),
            health_records: None,
            feeding_tasks: Some(Vec::new()),
            breeding_records: Some(Vec::new()),
            inventory: Some(Vec::new()),
            staff: Some(Vec::new()),
            settings: None,
        });

        assert_eq!(
            report.failed,
            [LoadSource::HealthRecords, LoadSource::Settings]
        );
        assert!(store.health_records_snapshot().is_empty());
        assert_eq!(*store.settings(), FacilitySettings::default());
        assert!(!store.settings_confirmed());
        assert!(store.last_load().is_some());
    }

    #[test]
    fn failed_settings_keep_the_last_loaded_copy() {
        let store = DataStore::new();
        let hilltop = FacilitySettings {
            facility_name: "Hilltop Rescue".into(),
            ..FacilitySettings::default()
        };
        store.apply_load(LoadSnapshot {
            settings: Some(hilltop.clone()),
            ..LoadSnapshot::default()
        });
        assert!(store.settings_confirmed());

        let report = store.apply_load(LoadSnapshot::default());

        assert!(report.failed.contains(&LoadSource::Settings));
        assert_eq!(*store.settings(), hilltop);
        assert!(!store.settings_confirmed());
    }
}
