use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mailboard_core::{Model, Record};
use mailboard_events::{publish_event, EventBus, ModelEvent};

/// Authoritative, ordered record collection (newest first).
///
/// Every mutation goes through [`Store::add`] / [`Store::remove`] and is
/// announced on the bus after the collection lock has been released, so
/// subscribers may read the store from inside their handlers.
pub struct Store<R: Record> {
    records: RwLock<VecDeque<R>>,
    bus: Arc<dyn EventBus<R>>,
}

impl<R: Record> Store<R> {
    pub fn new(bus: Arc<dyn EventBus<R>>) -> Self {
        Self::with_records(bus, Vec::new())
    }

    /// Create a store seeded with `records`, kept in the given order.
    ///
    /// Seeding announces nothing.
    pub fn with_records(bus: Arc<dyn EventBus<R>>, records: impl IntoIterator<Item = R>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().collect()),
            bus,
        }
    }

    pub fn add(&self, record: R) {
        self.write().push_front(record.clone());
        tracing::debug!(record = ?record, "record added");
        publish_event(self.bus.as_ref(), &ModelEvent::Added(record));
    }

    pub fn remove(&self, record: &R) -> bool {
        let removed = {
            let mut records = self.write();
            let index = records.iter().position(|r| r == record);
            index.and_then(|i| records.remove(i))
        };

        match removed {
            Some(removed) => {
                tracing::debug!(record = ?removed, "record removed");
                publish_event(self.bus.as_ref(), &ModelEvent::Removed(removed));
                true
            }
            None => {
                tracing::trace!(record = ?record, "remove missed; collection unchanged");
                false
            }
        }
    }

    pub fn get_all(&self) -> Vec<R> {
        self.read().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn contains(&self, record: &R) -> bool {
        self.read().contains(record)
    }

    fn read(&self) -> RwLockReadGuard<'_, VecDeque<R>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, VecDeque<R>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: Record> Model<R> for Store<R> {
    fn add(&self, record: R) {
        Store::add(self, record)
    }

    fn remove(&self, record: &R) -> bool {
        Store::remove(self, record)
    }

    fn get_all(&self) -> Vec<R> {
        Store::get_all(self)
    }
}

impl<R: Record> core::fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Store")
            .field("records", &*self.read())
            .finish_non_exhaustive()
    }
}
