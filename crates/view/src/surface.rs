//! Drawing collaborators.
//!
//! Renderers never draw themselves. Each leaf talks to a surface that can
//! mount its static structure once, add/remove display entries (or redraw),
//! and forward UI events back to the renderer as [`UiEvent`]s.

use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The element a renderer expects to draw into does not exist.
    #[error("element not found: {0}")]
    ElementNotFound(String),

    /// The surface is no longer attached to anything that can display it.
    #[error("surface detached")]
    Detached,
}

/// Raw user interaction reported by a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent<R> {
    /// The user submitted an input value (form submit).
    Submitted(R),
    /// The user activated the remove control next to a displayed record.
    RemoveRequested(R),
}

pub type UiListener<R> = Arc<dyn Fn(UiEvent<R>) + Send + Sync>;

/// Input form: a text field plus a submit control.
pub trait FormSurface<R>: Send + Sync {
    fn mount(&self) -> Result<(), SurfaceError>;

    fn clear_input(&self);

    fn listen(&self, listener: UiListener<R>);
}

/// List of displayed records, each with a remove control.
pub trait ListSurface<R>: Send + Sync {
    fn mount(&self) -> Result<(), SurfaceError>;

    /// Drop every displayed entry (used before a full redraw).
    fn clear_entries(&self);

    fn append_entry(&self, record: &R);

    fn prepend_entry(&self, record: &R);

    /// Remove the first displayed entry equal to `record`; `false` if none matched.
    fn remove_entry(&self, record: &R) -> bool;

    fn listen(&self, listener: UiListener<R>);
}

/// Presentational chart fed with the full record list.
///
/// Building the chart's dataset from the records is entirely the surface's business.
pub trait ChartSurface<R>: Send + Sync {
    fn mount(&self) -> Result<(), SurfaceError>;

    fn draw(&self, records: &[R]) -> Result<(), SurfaceError>;
}
