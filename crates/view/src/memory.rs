//! In-memory surfaces for tests and headless runs.
//!
//! They keep what was drawn and let callers play the user: `submit`,
//! `click_remove`. Listeners are invoked outside every internal lock, so a
//! listener may publish on the bus and have handlers call back into the surface.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::surface::{ChartSurface, FormSurface, ListSurface, SurfaceError, UiEvent, UiListener};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

fn fire<R: Clone>(listeners: &Mutex<Vec<UiListener<R>>>, event: UiEvent<R>) {
    let snapshot: Vec<UiListener<R>> = lock(listeners).clone();
    for listener in snapshot {
        listener(event.clone());
    }
}

/// Form with a single input field.
pub struct MemoryFormSurface<R> {
    mounts: Mutex<usize>,
    input: Mutex<Option<R>>,
    listeners: Mutex<Vec<UiListener<R>>>,
}

impl<R: Clone> MemoryFormSurface<R> {
    pub fn new() -> Self {
        Self {
            mounts: Mutex::new(0),
            input: Mutex::new(None),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Type `value` into the input field and press submit.
    pub fn submit(&self, value: R) {
        *lock(&self.input) = Some(value.clone());
        fire(&self.listeners, UiEvent::Submitted(value));
    }

    /// Current content of the input field (`None` once cleared).
    pub fn input(&self) -> Option<R> {
        lock(&self.input).clone()
    }

    pub fn mount_count(&self) -> usize {
        *lock(&self.mounts)
    }
}

impl<R: Clone> Default for MemoryFormSurface<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Clone + Send + Sync> FormSurface<R> for MemoryFormSurface<R> {
    fn mount(&self) -> Result<(), SurfaceError> {
        *lock(&self.mounts) += 1;
        Ok(())
    }

    fn clear_input(&self) {
        *lock(&self.input) = None;
    }

    fn listen(&self, listener: UiListener<R>) {
        lock(&self.listeners).push(listener);
    }
}

/// List of entries, top first.
pub struct MemoryListSurface<R> {
    mounts: Mutex<usize>,
    entries: Mutex<Vec<R>>,
    listeners: Mutex<Vec<UiListener<R>>>,
}

impl<R: Clone> MemoryListSurface<R> {
    pub fn new() -> Self {
        Self {
            mounts: Mutex::new(0),
            entries: Mutex::new(Vec::new()),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Press the remove control next to `record`.
    pub fn click_remove(&self, record: &R) {
        fire(&self.listeners, UiEvent::RemoveRequested(record.clone()));
    }

    pub fn entries(&self) -> Vec<R> {
        lock(&self.entries).clone()
    }

    pub fn mount_count(&self) -> usize {
        *lock(&self.mounts)
    }
}

impl<R: Clone> Default for MemoryListSurface<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Clone + PartialEq + Send + Sync> ListSurface<R> for MemoryListSurface<R> {
    fn mount(&self) -> Result<(), SurfaceError> {
        *lock(&self.mounts) += 1;
        Ok(())
    }

    fn clear_entries(&self) {
        lock(&self.entries).clear();
    }

    fn append_entry(&self, record: &R) {
        lock(&self.entries).push(record.clone());
    }

    fn prepend_entry(&self, record: &R) {
        lock(&self.entries).insert(0, record.clone());
    }

    fn remove_entry(&self, record: &R) -> bool {
        let mut entries = lock(&self.entries);
        match entries.iter().position(|e| e == record) {
            Some(index) => {
                entries.remove(index);
                true
            }
            None => false,
        }
    }

    fn listen(&self, listener: UiListener<R>) {
        lock(&self.listeners).push(listener);
    }
}

/// Chart that keeps every frame it was asked to draw.
pub struct MemoryChartSurface<R> {
    has_container: bool,
    frames: Mutex<Vec<Vec<R>>>,
}

impl<R: Clone> MemoryChartSurface<R> {
    pub fn new() -> Self {
        Self {
            has_container: true,
            frames: Mutex::new(Vec::new()),
        }
    }

    /// A surface whose chart container is missing: every call fails with
    /// [`SurfaceError::ElementNotFound`].
    pub fn without_container() -> Self {
        Self {
            has_container: false,
            frames: Mutex::new(Vec::new()),
        }
    }

    pub fn frames(&self) -> Vec<Vec<R>> {
        lock(&self.frames).clone()
    }

    pub fn last_frame(&self) -> Option<Vec<R>> {
        lock(&self.frames).last().cloned()
    }
}

impl<R: Clone> Default for MemoryChartSurface<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Clone + Send + Sync> ChartSurface<R> for MemoryChartSurface<R> {
    fn mount(&self) -> Result<(), SurfaceError> {
        if self.has_container {
            Ok(())
        } else {
            Err(SurfaceError::ElementNotFound("chart".to_string()))
        }
    }

    fn draw(&self, records: &[R]) -> Result<(), SurfaceError> {
        self.mount()?;
        lock(&self.frames).push(records.to_vec());
        Ok(())
    }
}
