//! In-memory synchronous event bus.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mailboard_core::{SubscriptionId, Topic};

use crate::bus::{EventBus, SubscriptionHandle};
use crate::handler::{self, Handler};

struct Entry<M> {
    id: SubscriptionId,
    handler: Handler<M>,
}

/// In-memory pub/sub bus.
///
/// - No IO / no async
/// - Topic → handler list, in registration order
/// - The lock is only held to read or edit the map, never while a handler runs
pub struct InMemoryEventBus<M> {
    topics: Mutex<HashMap<Topic, Vec<Entry<M>>>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self::default()
    }

    // Handler panics are caught outside the lock, so a poisoned map is still consistent.
    fn topics(&self) -> MutexGuard<'_, HashMap<Topic, Vec<Entry<M>>>> {
        self.topics.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self {
            topics: Mutex::new(HashMap::new()),
        }
    }
}

impl<M> core::fmt::Debug for InMemoryEventBus<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let topics = self.topics();
        let mut map = f.debug_map();
        for (topic, entries) in topics.iter() {
            map.entry(&topic.as_str(), &entries.len());
        }
        map.finish()
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M>
where
    M: 'static,
{
    fn subscribe(&self, topic: &Topic, handler: Handler<M>) -> SubscriptionHandle {
        let id = SubscriptionId::new();
        self.topics()
            .entry(topic.clone())
            .or_default()
            .push(Entry { id, handler });

        tracing::debug!(topic = %topic, subscription = %id, "subscribed");
        SubscriptionHandle::new(topic.clone(), id)
    }

    fn unsubscribe(&self, topic: &Topic, handler: &Handler<M>) {
        let removed = remove_first(&mut self.topics(), topic, |e| Arc::ptr_eq(&e.handler, handler));
        if let Some(id) = removed {
            tracing::debug!(topic = %topic, subscription = %id, "unsubscribed");
        }
    }

    fn cancel(&self, handle: &SubscriptionHandle) {
        let removed = remove_first(&mut self.topics(), handle.topic(), |e| e.id == handle.id());
        if let Some(id) = removed {
            tracing::debug!(topic = %handle.topic(), subscription = %id, "subscription cancelled");
        }
    }

    fn publish(&self, topic: &Topic, payload: &M) {
        let snapshot: Vec<(SubscriptionId, Handler<M>)> = match self.topics().get(topic) {
            Some(entries) => entries
                .iter()
                .map(|e| (e.id, Arc::clone(&e.handler)))
                .collect(),
            None => Vec::new(),
        };

        tracing::trace!(topic = %topic, handlers = snapshot.len(), "publish");

        for (id, h) in snapshot {
            if let Err(err) = handler::invoke(&h, payload) {
                tracing::error!(
                    topic = %topic,
                    subscription = %id,
                    error = %err,
                    "handler failed; continuing dispatch"
                );
            }
        }
    }

    fn subscriber_count(&self, topic: &Topic) -> usize {
        self.topics().get(topic).map_or(0, Vec::len)
    }
}

fn remove_first<M>(
    topics: &mut HashMap<Topic, Vec<Entry<M>>>,
    topic: &Topic,
    matches: impl Fn(&Entry<M>) -> bool,
) -> Option<SubscriptionId> {
    let entries = topics.get_mut(topic)?;
    let index = entries.iter().position(matches)?;
    let entry = entries.remove(index);
    if entries.is_empty() {
        topics.remove(topic);
    }
    Some(entry.id)
}
