// ── Reactive data store ──
//
// Ordered entity storage with push-based change notification.

mod collection;
mod data_store;
mod refresh;

pub use data_store::{DataStore, FacilitySnapshot};
pub use refresh::{LoadReport, LoadSource};

pub(crate) use collection::EntityCollection;
pub(crate) use refresh::LoadSnapshot;
