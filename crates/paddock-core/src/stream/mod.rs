// ── Collection subscriptions ──
//
// Watch-backed handles on one collection of the DataStore, plus the
// filter predicates list views apply to a snapshot.

mod filter;

use std::sync::Arc;

use tokio::sync::watch;

pub use filter::{
    AnimalFilter, BreedingRecordFilter, FeedingTaskFilter, HealthRecordFilter, InventoryFilter,
    StaffFilter,
};

/// Shared, immutable view of one collection in display order.
pub type Snapshot<T> = Arc<Vec<Arc<T>>>;

/// Live handle on one collection.
///
/// Remembers the snapshot it last observed; [`changed()`](Self::changed)
/// parks until the store publishes a newer one.
pub struct EntityStream<T> {
    seen: Snapshot<T>,
    rx: watch::Receiver<Snapshot<T>>,
}

impl<T> EntityStream<T> {
    pub(crate) fn new(mut rx: watch::Receiver<Snapshot<T>>) -> Self {
        let seen = rx.borrow_and_update().clone();
        Self { seen, rx }
    }

    /// The snapshot observed at subscription or by the last `changed()`.
    pub fn current(&self) -> &Snapshot<T> {
        &self.seen
    }

    /// Whatever the store holds right now, observed or not.
    pub fn latest(&self) -> Snapshot<T> {
        self.rx.borrow().clone()
    }

    /// Wait for the next published snapshot. `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<Snapshot<T>> {
        self.rx.changed().await.ok()?;
        self.seen = self.rx.borrow_and_update().clone();
        Some(Arc::clone(&self.seen))
    }
}
