//! Renderer capability.

use crate::record::Record;

/// Something that presents records.
///
/// Composite renderers forward to their children; leaf renderers draw through
/// an external drawing collaborator.
pub trait Renderer<R: Record>: Send + Sync {
    fn render(&self, data: &[R]);
}
