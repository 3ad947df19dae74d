use std::sync::Arc;

use mailboard_core::{Record, Renderer};
use mailboard_events::{infallible, publish_event, topics, EventBus, SubscriptionHandle, ViewIntent};

use crate::leaf::LeafLifecycle;
use crate::surface::{FormSurface, UiEvent};

/// Input form for new records.
///
/// Submitting a non-empty value publishes `view.intent.add`. The input is
/// cleared whenever the model announces an addition, whoever caused it.
pub struct FormRenderer<R: Record> {
    surface: Arc<dyn FormSurface<R>>,
    bus: Arc<dyn EventBus<R>>,
    lifecycle: LeafLifecycle,
}

impl<R: Record> FormRenderer<R> {
    pub fn new(surface: Arc<dyn FormSurface<R>>, bus: Arc<dyn EventBus<R>>) -> Self {
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
        self.surface.listen(Arc::new(move |event: UiEvent<R>| match event {
            UiEvent::Submitted(value) if value.is_empty_input() => {
                tracing::debug!("empty submission ignored");
            }
            UiEvent::Submitted(value) => publish_event(bus.as_ref(), &ViewIntent::Add(value)),
            UiEvent::RemoveRequested(_) => {}
        }));

        let surface = self.surface.clone();
        vec![self.bus.subscribe(
            &topics::MODEL_RECORD_ADDED,
            infallible(move |_: &R| surface.clear_input()),
        )]
    }
}

impl<R: Record> Renderer<R> for FormRenderer<R> {
    fn render(&self, _data: &[R]) {
        self.lifecycle.mount_once(|| {
            if let Err(err) = self.surface.mount() {
                tracing::warn!(error = %err, "form could not be mounted");
            }
        });
        self.lifecycle.bind_once(|| self.bind_events());
    }
}
