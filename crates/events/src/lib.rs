//! Topic-based publish/subscribe.

pub mod bus;
pub mod event;
pub mod handler;
pub mod in_memory_bus;
pub mod topics;

pub use bus::{EventBus, SubscriptionHandle};
pub use event::{publish_event, Event, ModelEvent, ViewIntent};
pub use handler::{handler, infallible, Handler};
pub use in_memory_bus::InMemoryEventBus;
