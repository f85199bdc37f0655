// ── Core identity types ──
//
// Every collection entity carries a server-assigned, type-prefixed id
// such as `A001` or `H014`. The client never mints ids; it only parses
// them for display and grouping.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

// ── EntityKind ──────────────────────────────────────────────────────

/// The entity type encoded by an id's leading letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Animal,
    HealthRecord,
    FeedingTask,
    BreedingRecord,
    InventoryItem,
    StaffMember,
}

impl EntityKind {
    pub fn prefix(self) -> char {
        match self {
            Self::Animal => 'A',
            Self::HealthRecord => 'H',
            Self::FeedingTask => 'F',
            Self::BreedingRecord => 'B',
            Self::InventoryItem => 'I',
            Self::StaffMember => 'S',
        }
    }

    pub fn from_prefix(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::Animal),
            'H' => Some(Self::HealthRecord),
            'F' => Some(Self::FeedingTask),
            'B' => Some(Self::BreedingRecord),
            'I' => Some(Self::InventoryItem),
            'S' => Some(Self::StaffMember),
            _ => None,
        }
    }
}

// ── EntityId ────────────────────────────────────────────────────────

/// Server-assigned identifier for any collection entity.
///
/// Opaque on the wire (a plain JSON string). Ids seeded outside the
/// backend's generator (e.g. raw document ids) are accepted as-is and
/// simply report no [`kind`](Self::kind).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Entity type, if the id follows the `<prefix><digits>` scheme.
    pub fn kind(&self) -> Option<EntityKind> {
        self.sequence()?;
        self.0.chars().next().and_then(EntityKind::from_prefix)
    }

    /// Numeric part of a `<prefix><digits>` id.
    pub fn sequence(&self) -> Option<u32> {
        let digits = self.0.get(1..)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EntityId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefixed_ids() {
        let id = EntityId::from("A001");
        assert_eq!(id.kind(), Some(EntityKind::Animal));
        assert_eq!(id.sequence(), Some(1));

        let id: EntityId = "H120".parse().unwrap();
        assert_eq!(id.kind(), Some(EntityKind::HealthRecord));
        assert_eq!(id.sequence(), Some(120));
    }

    #[test]
    fn foreign_ids_have_no_kind() {
        let id = EntityId::from("507f1f77bcf86cd799439011");
        assert_eq!(id.kind(), None);
        assert_eq!(EntityId::from("A").kind(), None);
        assert_eq!(EntityId::from("X001").kind(), None);
        assert_eq!(EntityId::from("").sequence(), None);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = EntityId::from("S004");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"S004\"");
        let back: EntityId = serde_json::from_str("\"S004\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn prefix_round_trips() {
        for kind in [
            EntityKind::Animal,
            EntityKind::HealthRecord,
            EntityKind::FeedingTask,
            EntityKind::BreedingRecord,
            EntityKind::InventoryItem,
            EntityKind::StaffMember,
        ] {
            assert_eq!(EntityKind::from_prefix(kind.prefix()), Some(kind));
        }
    }
}
