use mailboard_core::{Record, Topic};

use crate::bus::EventBus;
use crate::topics;

/// A typed event that knows its wire topic.
///
/// The topic string is the contract between publishers and subscribers; the
/// typed enums below only make it harder to pair a topic with the wrong payload.
pub trait Event<M> {
    fn topic(&self) -> Topic;

    fn payload(&self) -> &M;
}

/// Facts announced by a model after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelEvent<R> {
    /// Published as `model.record.added`.
    Added(R),
    /// Published as `model.record.removed`.
    Removed(R),
}

/// User intents announced by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewIntent<R> {
    /// Published as `view.intent.add`.
    Add(R),
    /// Published as `view.intent.remove`.
    Remove(R),
}

impl<R: Record> ModelEvent<R> {
    pub fn record(&self) -> &R {
        match self {
            ModelEvent::Added(r) | ModelEvent::Removed(r) => r,
        }
    }
}

impl<R: Record> Event<R> for ModelEvent<R> {
    fn topic(&self) -> Topic {
        match self {
            ModelEvent::Added(_) => topics::MODEL_RECORD_ADDED,
            ModelEvent::Removed(_) => topics::MODEL_RECORD_REMOVED,
        }
    }

    fn payload(&self) -> &R {
        self.record()
    }
}

impl<R: Record> ViewIntent<R> {
    pub fn record(&self) -> &R {
        match self {
            ViewIntent::Add(r) | ViewIntent::Remove(r) => r,
        }
    }
}

impl<R: Record> Event<R> for ViewIntent<R> {
    fn topic(&self) -> Topic {
        match self {
            ViewIntent::Add(_) => topics::VIEW_INTENT_ADD,
            ViewIntent::Remove(_) => topics::VIEW_INTENT_REMOVE,
        }
    }

    fn payload(&self) -> &R {
        self.record()
    }
}

/// Publish a typed event on its own topic.
pub fn publish_event<M, B, E>(bus: &B, event: &E)
where
    B: EventBus<M> + ?Sized,
    E: Event<M>,
{
    bus.publish(&event.topic(), event.payload());
}
