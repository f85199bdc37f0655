// ── Filter predicates for entity snapshots ──
//
// Used by list screens to narrow snapshots without re-querying the API.

use chrono::NaiveDate;

use crate::model::{
    Animal, AnimalStatus, BreedingRecord, BreedingStatus, EntityId, FeedingStatus, FeedingTask,
    HealthRecord, HealthRecordType, HealthStatus, InventoryCategory, InventoryItem, StaffMember,
    StaffRole, StaffStatus, StockStatus,
};

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter predicate for the animal registry.
pub enum AnimalFilter {
    All,
    ByStatus(AnimalStatus),
    BySpecies(String),
    /// Case-insensitive match on name, species, breed or id.
    Search(String),
    Custom(Box<dyn Fn(&Animal) -> bool + Send + Sync>),
}

impl AnimalFilter {
    pub fn matches(&self, animal: &Animal) -> bool {
        match self {
            Self::All => true,
            Self::ByStatus(s) => animal.status == *s,
            Self::BySpecies(species) => animal.species.eq_ignore_ascii_case(species),
            Self::Search(term) => {
                contains_ci(&animal.name, term)
                    || contains_ci(&animal.species, term)
                    || contains_ci(&animal.breed, term)
                    || contains_ci(animal.id.as_str(), term)
            }
            Self::Custom(f) => f(animal),
        }
    }
}

/// Filter predicate for health records.
pub enum HealthRecordFilter {
    All,
    ByAnimal(EntityId),
    ByType(HealthRecordType),
    ByStatus(HealthStatus),
    /// Not yet completed.
    Open,
    /// Follow-up due on or before the given date.
    DueBy(NaiveDate),
    Custom(Box<dyn Fn(&HealthRecord) -> bool + Send + Sync>),
}

impl HealthRecordFilter {
    pub fn matches(&self, record: &HealthRecord) -> bool {
        match self {
            Self::All => true,
            Self::ByAnimal(id) => record.animal_id == *id,
            Self::ByType(t) => record.record_type == *t,
            Self::ByStatus(s) => record.status == *s,
            Self::Open => record.status.is_open(),
            Self::DueBy(date) => record.next_due.is_some_and(|due| due <= *date),
            Self::Custom(f) => f(record),
        }
    }
}

/// Filter predicate for feeding tasks.
pub enum FeedingTaskFilter {
    All,
    ByAnimal(EntityId),
    ByStatus(FeedingStatus),
    Custom(Box<dyn Fn(&FeedingTask) -> bool + Send + Sync>),
}

impl FeedingTaskFilter {
    pub fn matches(&self, task: &FeedingTask) -> bool {
        match self {
            Self::All => true,
            Self::ByAnimal(id) => task.animal_id == *id,
            Self::ByStatus(s) => task.status == *s,
            Self::Custom(f) => f(task),
        }
    }
}

/// Filter predicate for breeding records.
pub enum BreedingRecordFilter {
    All,
    /// Either parent.
    ByParent(EntityId),
    ByStatus(BreedingStatus),
    Custom(Box<dyn Fn(&BreedingRecord) -> bool + Send + Sync>),
}

impl BreedingRecordFilter {
    pub fn matches(&self, record: &BreedingRecord) -> bool {
        match self {
            Self::All => true,
            Self::ByParent(id) => record.involves(id),
            Self::ByStatus(s) => record.status == *s,
            Self::Custom(f) => f(record),
        }
    }
}

/// Filter predicate for inventory items.
pub enum InventoryFilter {
    All,
    ByCategory(InventoryCategory),
    ByStatus(StockStatus),
    /// Anything not In Stock.
    NeedsReorder,
    Search(String),
    Custom(Box<dyn Fn(&InventoryItem) -> bool + Send + Sync>),
}

impl InventoryFilter {
    pub fn matches(&self, item: &InventoryItem) -> bool {
        match self {
            Self::All => true,
            Self::ByCategory(c) => item.category == *c,
            Self::ByStatus(s) => item.status == *s,
            Self::NeedsReorder => item.needs_reorder(),
            Self::Search(term) => contains_ci(&item.name, term),
            Self::Custom(f) => f(item),
        }
    }
}

/// Filter predicate for staff members.
pub enum StaffFilter {
    All,
    ByRole(StaffRole),
    ByStatus(StaffStatus),
    /// Case-insensitive match on name or email.
    Search(String),
    Custom(Box<dyn Fn(&StaffMember) -> bool + Send + Sync>),
}

impl StaffFilter {
    pub fn matches(&self, member: &StaffMember) -> bool {
        match self {
            Self::All => true,
            Self::ByRole(r) => member.role == *r,
            Self::ByStatus(s) => member.status == *s,
            Self::Search(term) => contains_ci(&member.name, term) || contains_ci(&member.email, term),
            Self::Custom(f) => f(member),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;

    fn rex() -> Animal {
        Animal {
            id: EntityId::from("A001"),
            name: "Rex".into(),
            species: "Dog".into(),
            breed: "Labrador".into(),
            age: 3,
            gender: Gender::Male,
            weight: Some(30.0),
            status: AnimalStatus::Healthy,
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn animal_search_is_case_insensitive() {
        let animal = rex();
        assert!(AnimalFilter::Search("labra".into()).matches(&animal));
        assert!(AnimalFilter::Search("a001".into()).matches(&animal));
        assert!(!AnimalFilter::Search("cat".into()).matches(&animal));
        assert!(AnimalFilter::BySpecies("dog".into()).matches(&animal));
        assert!(!AnimalFilter::ByStatus(AnimalStatus::Quarantine).matches(&animal));
    }

    #[test]
    fn breeding_parent_filter_checks_both_sides() {
        let record = BreedingRecord {
            id: EntityId::from("B001"),
            mother_id: EntityId::from("A002"),
            father_id: EntityId::from("A001"),
            mating_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            due_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default(),
            expected_litter: None,
            actual_litter: None,
            status: BreedingStatus::Pregnant,
            notes: None,
            created_at: None,
            updated_at: None,
        };
        assert!(BreedingRecordFilter::ByParent(EntityId::from("A001")).matches(&record));
        assert!(BreedingRecordFilter::ByParent(EntityId::from("A002")).matches(&record));
        assert!(!BreedingRecordFilter::ByParent(EntityId::from("A003")).matches(&record));
    }

    #[test]
    fn custom_filter_runs_closure() {
        let heavy = AnimalFilter::Custom(Box::new(|a| a.weight.is_some_and(|w| w > 25.0)));
        assert!(heavy.matches(&rex()));
    }
}
