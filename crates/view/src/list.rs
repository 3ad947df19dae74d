use std::sync::Arc;

use mailboard_core::{Record, Renderer};
use mailboard_events::{infallible, publish_event, topics, EventBus, SubscriptionHandle, ViewIntent};

use crate::leaf::LeafLifecycle;
use crate::surface::{ListSurface, UiEvent};

/// Displayed record list with a remove control per entry.
///
/// `render` redraws the whole list; afterwards the list follows model
/// announcements incrementally (prepend on add, drop first match on remove).
pub struct ListRenderer<R: Record> {
    surface: Arc<dyn ListSurface<R>>,
    bus: Arc<dyn EventBus<R>>,
    lifecycle: LeafLifecycle,
}

impl<R: Record> ListRenderer<R> {
    pub fn new(surface: Arc<dyn ListSurface<R>>, bus: Arc<dyn EventBus<R>>) -> Self {
        Self {
            surface,
            bus,
            lifecycle: LeafLifecycle::default(),
        }
    }

    pub fn bindings(&self) -> &[SubscriptionHandle] {
        self.lifecycle.bindings()
    }

    fn bind_events(&self) -> Vec<SubscriptionHandle> {
        let bus = self.bus.clone();
        self.surface.listen(Arc::new(move |event: UiEvent<R>| {
            if let UiEvent::RemoveRequested(record) = event {
                publish_event(bus.as_ref(), &ViewIntent::Remove(record));
            }
        }));

        let on_added = self.surface.clone();
        let on_removed = self.surface.clone();
        vec![
            self.bus.subscribe(
                &topics::MODEL_RECORD_ADDED,
                infallible(move |record: &R| on_added.prepend_entry(record)),
            ),
            self.bus.subscribe(
                &topics::MODEL_RECORD_REMOVED,
                infallible(move |record: &R| {
                    if !on_removed.remove_entry(record) {
                        tracing::debug!(record = ?record, "removed record was not displayed");
                    }
                }),
            ),
        ]
    }
}

impl<R: Record> Renderer<R> for ListRenderer<R> {
    fn render(&self, data: &[R]) {
        self.lifecycle.mount_once(|| {
            if let Err(err) = self.surface.mount() {
                tracing::warn!(error = %err, "list could not be mounted");
            }
        });

        self.surface.clear_entries();
        for record in data {
            self.surface.append_entry(record);
        }

        self.lifecycle.bind_once(|| self.bind_events());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use mailboard_events::InMemoryEventBus;

    use super::*;
    use crate::memory::MemoryListSurface;

    fn s(v: &str) -> String {
        v.to_string()
    }

    fn setup() -> (
        ListRenderer<String>,
        Arc<MemoryListSurface<String>>,
        Arc<dyn EventBus<String>>,
    ) {
        let bus: Arc<dyn EventBus<String>> = Arc::new(InMemoryEventBus::new());
        let surface = Arc::new(MemoryListSurface::new());
        let list = ListRenderer::new(surface.clone(), bus.clone());
        (list, surface, bus)
    }

    #[test]
    fn render_draws_records_in_order() {
        let (list, surface, _bus) = setup();

        list.render(&[s("b@x.com"), s("a@x.com")]);

        assert_eq!(surface.entries(), vec![s("b@x.com"), s("a@x.com")]);
    }

    #[test]
    fn rerender_replaces_entries_without_rebinding() {
        let (list, surface, bus) = setup();

        list.render(&[s("a")]);
        list.render(&[s("b"), s("c")]);

        assert_eq!(surface.entries(), vec![s("b"), s("c")]);
        assert_eq!(surface.mount_count(), 1);
        assert_eq!(list.bindings().len(), 2);
        assert_eq!(bus.subscriber_count(&topics::MODEL_RECORD_ADDED), 1);
        assert_eq!(bus.subscriber_count(&topics::MODEL_RECORD_REMOVED), 1);
    }

    #[test]
    fn follows_model_announcements() {
        let (list, surface, bus) = setup();
        list.render(&[s("a"), s("b"), s("a")]);

        bus.publish(&topics::MODEL_RECORD_ADDED, &s("c"));
        assert_eq!(surface.entries(), vec![s("c"), s("a"), s("b"), s("a")]);

        bus.publish(&topics::MODEL_RECORD_REMOVED, &s("a"));
        assert_eq!(surface.entries(), vec![s("c"), s("b"), s("a")]);

        bus.publish(&topics::MODEL_RECORD_REMOVED, &s("missing"));
        assert_eq!(surface.entries(), vec![s("c"), s("b"), s("a")]);
    }

    #[test]
    fn remove_click_publishes_remove_intent() {
        let (list, surface, bus) = setup();
        list.render(&[s("a@x.com")]);

        let intents = Arc::new(Mutex::new(Vec::new()));
        let sink = intents.clone();
        bus.subscribe(
            &topics::VIEW_INTENT_REMOVE,
            infallible(move |r: &String| sink.lock().unwrap().push(r.clone())),
        );

        surface.click_remove(&s("a@x.com"));

        assert_eq!(*intents.lock().unwrap(), vec![s("a@x.com")]);
        // The list only changes once the model confirms the removal.
        assert_eq!(surface.entries(), vec![s("a@x.com")]);
    }
}
