//! Event publishing/subscription abstraction.
//!
//! The bus decouples publishers from subscribers by named [`Topic`]. It is a
//! plain synchronous dispatcher:
//!
//! - **In-order**: handlers run in registration order, one after another
//! - **Synchronous**: `publish` returns once every handler has run
//! - **Re-entrant**: a handler may publish, subscribe, or unsubscribe while it runs
//! - **Isolated**: a failing handler is logged and never stops the dispatch loop
//!
//! Nested publishes are delivered depth-first, exactly where they are issued.
//! Nothing is queued, so the observable ordering is that of direct calls.

use std::sync::Arc;

use mailboard_core::{SubscriptionId, Topic};

use crate::handler::Handler;

/// Receipt for a registered handler.
///
/// Handles identify one subscription even when the same handler was
/// subscribed several times to the same topic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle {
    topic: Topic,
    id: SubscriptionId,
}

impl SubscriptionHandle {
    pub fn new(topic: Topic, id: SubscriptionId) -> Self {
        Self { topic, id }
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

/// Named-topic event dispatcher.
///
/// Components receive the bus by injection (`Arc<dyn EventBus<M>>`) at
/// construction time; there is no process-wide instance.
///
/// ## Snapshot semantics
///
/// `publish` snapshots the topic's handler list before invoking anything.
/// Subscriptions added or removed while a publish is in flight take effect
/// from the next publish on that topic.
pub trait EventBus<M>: Send + Sync {
    /// Append `handler` to the list for `topic`.
    ///
    /// No deduplication: subscribing the same handler twice yields two invocations
    /// per publish.
    fn subscribe(&self, topic: &Topic, handler: Handler<M>) -> SubscriptionHandle;

    /// Remove the first subscription on `topic` whose handler is `handler`
    /// (same shared allocation). No-op when nothing matches.
    fn unsubscribe(&self, topic: &Topic, handler: &Handler<M>);

    /// Remove exactly the subscription identified by `handle`. No-op when it is already gone.
    fn cancel(&self, handle: &SubscriptionHandle);

    /// Invoke every handler registered under `topic`, in registration order.
    ///
    /// Publishing to a topic without subscribers is a silent no-op.
    fn publish(&self, topic: &Topic, payload: &M);

    /// Number of live subscriptions for `topic`.
    fn subscriber_count(&self, topic: &Topic) -> usize;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    fn subscribe(&self, topic: &Topic, handler: Handler<M>) -> SubscriptionHandle {
        (**self).subscribe(topic, handler)
    }

    fn unsubscribe(&self, topic: &Topic, handler: &Handler<M>) {
        (**self).unsubscribe(topic, handler)
    }

    fn cancel(&self, handle: &SubscriptionHandle) {
        (**self).cancel(handle)
    }

    fn publish(&self, topic: &Topic, payload: &M) {
        (**self).publish(topic, payload)
    }

    fn subscriber_count(&self, topic: &Topic) -> usize {
        (**self).subscriber_count(topic)
    }
}
