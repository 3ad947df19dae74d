use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mailboard_core::{HandlerError, Record, Renderer};
use mailboard_events::{handler, topics, EventBus, SubscriptionHandle};

use crate::leaf::LeafLifecycle;
use crate::surface::{ChartSurface, SurfaceError};

/// Presentational chart over the full record list. Publishes no intents.
///
/// The renderer keeps a mirror of the records it was given and redraws the
/// whole chart on every model announcement. A missing chart container is
/// logged and never stops the rest of the page from rendering.
pub struct ChartRenderer<R: Record> {
    surface: Arc<dyn ChartSurface<R>>,
    bus: Arc<dyn EventBus<R>>,
    series: Arc<Mutex<Vec<R>>>,
    lifecycle: LeafLifecycle,
}

impl<R: Record> ChartRenderer<R> {
    pub fn new(surface: Arc<dyn ChartSurface<R>>, bus: Arc<dyn EventBus<R>>) -> Self {
        Self {
            surface,
            bus,
            series: Arc::new(Mutex::new(Vec::new())),
            lifecycle: LeafLifecycle::default(),
        }
    }

    pub fn bindings(&self) -> &[SubscriptionHandle] {
        self.lifecycle.bindings()
    }

    /// Records currently charted, newest first.
    pub fn series(&self) -> Vec<R> {
        lock(&self.series).clone()
    }

    fn bind_events(&self) -> Vec<SubscriptionHandle> {
        let (surface, series) = (self.surface.clone(), self.series.clone());
        let on_added = handler(move |record: &R| {
            let snapshot = {
                let mut series = lock(&series);
                series.insert(0, record.clone());
                series.clone()
            };
            surface.draw(&snapshot).map_err(redraw_failed)
        });

        let (surface, series) = (self.surface.clone(), self.series.clone());
        let on_removed = handler(move |record: &R| {
            let snapshot = {
                let mut series = lock(&series);
                match series.iter().position(|r| r == record) {
                    Some(index) => {
                        series.remove(index);
                        series.clone()
                    }
                    None => return Ok(()),
                }
            };
            surface.draw(&snapshot).map_err(redraw_failed)
        });

        vec![
            self.bus.subscribe(&topics::MODEL_RECORD_ADDED, on_added),
            self.bus.subscribe(&topics::MODEL_RECORD_REMOVED, on_removed),
        ]
    }
}

impl<R: Record> Renderer<R> for ChartRenderer<R> {
    fn render(&self, data: &[R]) {
        self.lifecycle.mount_once(|| {
            if let Err(err) = self.surface.mount() {
                tracing::warn!(error = %err, "chart container missing; chart will not be shown");
            }
        });

        *lock(&self.series) = data.to_vec();
        if let Err(err) = self.surface.draw(data) {
            tracing::warn!(error = %err, records = data.len(), "chart draw failed");
        }

        self.lifecycle.bind_once(|| self.bind_events());
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

fn redraw_failed(err: SurfaceError) -> HandlerError {
    HandlerError::failed(format!("chart redraw: {err}"))
}
