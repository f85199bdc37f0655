// REST collections exposed by the facility backend.

use strum::{Display, EnumIter, IntoStaticStr};

/// One CRUD collection under the `/api` base path.
///
/// The settings singleton is not a collection and has dedicated
/// methods on [`FacilityClient`](crate::FacilityClient).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum Resource {
    #[strum(serialize = "animals")]
    Animals,
    #[strum(serialize = "health-records")]
    HealthRecords,
    #[strum(serialize = "feeding-tasks")]
    FeedingTasks,
    #[strum(serialize = "breeding-records")]
    BreedingRecords,
    #[strum(serialize = "inventory")]
    Inventory,
    #[strum(serialize = "staff")]
    Staff,
}

impl Resource {
    /// Path segment under `/api`.
    pub fn path(self) -> &'static str {
        self.into()
    }

    /// Singular human label, used in log lines and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Animals => "animal",
            Self::HealthRecords => "health record",
            Self::FeedingTasks => "feeding task",
            Self::BreedingRecords => "breeding record",
            Self::Inventory => "inventory item",
            Self::Staff => "staff member",
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn display_matches_path() {
        for resource in Resource::iter() {
            assert_eq!(resource.to_string(), resource.path());
        }
    }
}
