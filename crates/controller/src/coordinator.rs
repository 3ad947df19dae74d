//! Controller: binds renderer intents to model mutations.
//!
//! ## Flow
//!
//! ```text
//! initialize()
//!   ↓
//! 1. model.get_all()
//!   ↓
//! 2. renderer.render(data)        (once)
//!   ↓
//! 3. bind_events()                (once)
//!      view.intent.add    → model.add(record)
//!      view.intent.remove → model.remove(record)
//! ```
//!
//! After that the coordinator only reacts: a renderer publishes an intent,
//! the coordinator mutates the model, and the model's own announcements
//! update the renderers. The coordinator never talks to a renderer again.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use mailboard_core::{Model, Record, Renderer};
use mailboard_events::{infallible, topics, EventBus, SubscriptionHandle};

pub struct Coordinator<R: Record> {
    model: Arc<dyn Model<R>>,
    renderer: Arc<dyn Renderer<R>>,
    bus: Arc<dyn EventBus<R>>,
    initialized: AtomicBool,
    bindings: OnceLock<Vec<SubscriptionHandle>>,
}

impl<R: Record> Coordinator<R> {
    pub fn new(
        model: Arc<dyn Model<R>>,
        renderer: Arc<dyn Renderer<R>>,
        bus: Arc<dyn EventBus<R>>,
    ) -> Self {
        Self {
            model,
            renderer,
            bus,
            initialized: AtomicBool::new(false),
            bindings: OnceLock::new(),
        }
    }

    /// Render the model's current records once, then start listening for intents.
    ///
    /// Only the first call has an effect; later calls are logged and ignored,
    /// so the renderer is never drawn twice and no intent is handled twice.
    pub fn initialize(&self) {
        if self.initialized.swap(true, Ordering::AcqRel) {
            tracing::warn!("coordinator already initialized; ignoring");
            return;
        }

        let data = self.model.get_all();
        tracing::info!(records = data.len(), "initial render");
        self.renderer.render(&data);

        self.bind_events();
    }

    /// Subscribe to the view intents. Single-shot: later calls are no-ops.
    pub fn bind_events(&self) {
        if self.bindings.get().is_some() {
            tracing::debug!("coordinator events already bound");
            return;
        }

        self.bindings.get_or_init(|| {
            tracing::info!("binding coordinator events");

            let on_add = self.model.clone();
            let on_remove = self.model.clone();
            vec![
                self.bus.subscribe(
                    &topics::VIEW_INTENT_ADD,
                    infallible(move |record: &R| on_add.add(record.clone())),
                ),
                self.bus.subscribe(
                    &topics::VIEW_INTENT_REMOVE,
                    infallible(move |record: &R| {
                        on_remove.remove(record);
                    }),
                ),
            ]
        });
    }

    /// Add a record on behalf of the view.
    pub fn add_record(&self, record: R) {
        self.model.add(record);
    }

    /// Remove a record on behalf of the view; `false` if the model did not hold it.
    pub fn remove_record(&self, record: &R) -> bool {
        self.model.remove(record)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    pub fn bindings(&self) -> &[SubscriptionHandle] {
        self.bindings.get().map_or(&[], Vec::as_slice)
    }
}
