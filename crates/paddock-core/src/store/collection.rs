// ── Generic reactive entity collection ──
//
// Ordered storage keyed by entity id, with push-based change
// notification via `watch` channels. Order is server order for loaded
// entities, then creation order for anything appended afterwards.

use std::sync::{Arc, PoisonError, RwLock};

use indexmap::IndexMap;
use tokio::sync::watch;

use crate::model::{Entity, EntityId};

/// A reactive, ordered collection for a single entity type.
///
/// Every effective mutation rebuilds the snapshot that subscribers
/// receive; a no-op (unknown id, nothing retained away) publishes nothing.
/// Readers only ever see whole snapshots.
pub(crate) struct EntityCollection<T: Entity> {
    /// Primary storage: id -> entity, in display order.
    entries: RwLock<IndexMap<EntityId, Arc<T>>>,

    /// Full snapshot, rebuilt on mutation for efficient subscription.
    snapshot: watch::Sender<Arc<Vec<Arc<T>>>>,
}

impl<T: Entity> EntityCollection<T> {
    pub(crate) fn new() -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));

        Self {
            entries: RwLock::new(IndexMap::new()),
            snapshot,
        }
    }

    /// Replace the whole collection, keeping the given order.
    ///
    /// A duplicate id keeps its first position and the later value.
    pub(crate) fn replace_all(&self, entities: Vec<T>) {
        let mut map = IndexMap::with_capacity(entities.len());
        for entity in entities {
            map.insert(entity.id().clone(), Arc::new(entity));
        }
        self.mutate(|entries| {
            *entries = map;
            true
        });
    }

    /// Add an entity at the end. An entity whose id is already present
    /// replaces the old value in place.
    pub(crate) fn append(&self, entity: T) -> Arc<T> {
        let entity = Arc::new(entity);
        let stored = Arc::clone(&entity);
        self.mutate(move |entries| {
            entries.insert(stored.id().clone(), stored);
            true
        });
        entity
    }

    /// Replace an existing entity in place. Returns `None` (and changes
    /// nothing) when the id is no longer present.
    pub(crate) fn replace(&self, entity: T) -> Option<Arc<T>> {
        let entity = Arc::new(entity);
        let mut replaced = false;
        self.mutate(|entries| {
            if let Some(slot) = entries.get_mut(entity.id()) {
                *slot = Arc::clone(&entity);
                replaced = true;
            }
            replaced
        });
        replaced.then_some(entity)
    }

    /// Remove an entity by id. Returns the removed entity if it existed.
    pub(crate) fn remove(&self, id: &EntityId) -> Option<Arc<T>> {
        let mut removed = None;
        self.mutate(|entries| {
            removed = entries.shift_remove(id);
            removed.is_some()
        });
        removed
    }

    /// Keep only entities matching the predicate. Returns how many were dropped.
    pub(crate) fn retain(&self, mut keep: impl FnMut(&T) -> bool) -> usize {
        let mut dropped = 0;
        self.mutate(|entries| {
            let before = entries.len();
            entries.retain(|_, entity| keep(entity));
            dropped = before - entries.len();
            dropped > 0
        });
        dropped
    }

    pub(crate) fn get(&self, id: &EntityId) -> Option<Arc<T>> {
        self.read().get(id).cloned()
    }

    /// Get the current snapshot (cheap `Arc` clone).
    pub(crate) fn snapshot(&self) -> Arc<Vec<Arc<T>>> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot changes via a `watch::Receiver`.
    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<Vec<Arc<T>>>> {
        self.snapshot.subscribe()
    }

    pub(crate) fn len(&self) -> usize {
        self.read().len()
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn read(&self) -> std::sync::RwLockReadGuard<'_, IndexMap<EntityId, Arc<T>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `f` under the write lock; publish a new snapshot when it
    /// reports a change. The snapshot is sent before the lock is
    /// released so publication order matches mutation order.
    fn mutate(&self, f: impl FnOnce(&mut IndexMap<EntityId, Arc<T>>) -> bool) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if !f(&mut entries) {
            return;
        }
        let values: Vec<Arc<T>> = entries.values().cloned().collect();
        // `send_modify` updates unconditionally, even with zero receivers.
        self.snapshot.send_modify(|snap| *snap = Arc::new(values));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::EntityKind;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: EntityId,
        label: &'static str,
    }

    impl Entity for Item {
        const KIND: EntityKind = EntityKind::InventoryItem;

        fn id(&self) -> &EntityId {
            &self.id
        }
    }

    fn item(id: &str, label: &'static str) -> Item {
        Item {
            id: EntityId::from(id),
            label,
        }
    }

    fn labels(col: &EntityCollection<Item>) -> Vec<&'static str> {
        col.snapshot().iter().map(|i| i.label).collect()
    }

    #[test]
    fn replace_all_keeps_server_order() {
        let col = EntityCollection::new();
        col.replace_all(vec![item("I003", "c"), item("I001", "a"), item("I002", "b")]);
        assert_eq!(labels(&col), ["c", "a", "b"]);
        assert_eq!(col.len(), 3);
    }

    #[test]
    fn append_goes_to_the_end() {
        let col = EntityCollection::new();
        col.replace_all(vec![item("I002", "b")]);
        col.append(item("I001", "a"));
        assert_eq!(labels(&col), ["b", "a"]);
    }

    #[test]
    fn replace_is_in_place_and_only_for_known_ids() {
        let col = EntityCollection::new();
        col.replace_all(vec![item("I001", "a"), item("I002", "b")]);

        assert!(col.replace(item("I001", "A")).is_some());
        assert_eq!(labels(&col), ["A", "b"]);

        let rx = col.subscribe();
        assert!(col.replace(item("I009", "z")).is_none());
        assert_eq!(col.len(), 2);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let col = EntityCollection::new();
        col.replace_all(vec![item("I001", "a"), item("I002", "b"), item("I003", "c")]);

        assert_eq!(col.remove(&EntityId::from("I002")).unwrap().label, "b");
        assert_eq!(labels(&col), ["a", "c"]);
        assert!(col.remove(&EntityId::from("I002")).is_none());
        assert!(col.get(&EntityId::from("I002")).is_none());
    }

    #[test]
    fn retain_reports_dropped_count() {
        let col = EntityCollection::new();
        col.replace_all(vec![item("I001", "x"), item("I002", "y"), item("I003", "x")]);

        assert_eq!(col.retain(|i| i.label != "x"), 2);
        assert_eq!(labels(&col), ["y"]);

        let rx = col.subscribe();
        assert_eq!(col.retain(|_| true), 0);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn subscribers_see_new_snapshots() {
        let col = EntityCollection::new();
        let mut rx = col.subscribe();
        assert!(rx.borrow_and_update().is_empty());

        col.append(item("I001", "a"));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 1);
    }
}
