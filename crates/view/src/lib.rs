//! Renderers (the view).
//!
//! A page is a [`CompositeRenderer`] of leaf renderers. Leaves draw through
//! the collaborator traits in [`surface`], publish user intents on the bus,
//! and follow model announcements to update incrementally.

pub mod chart;
pub mod composite;
pub mod form;
mod leaf;
pub mod list;
pub mod memory;
pub mod surface;

pub use chart::ChartRenderer;
pub use composite::CompositeRenderer;
pub use form::FormRenderer;
pub use list::ListRenderer;
pub use memory::{MemoryChartSurface, MemoryFormSurface, MemoryListSurface};
pub use surface::{ChartSurface, FormSurface, ListSurface, SurfaceError, UiEvent, UiListener};
