use std::sync::Arc;

use mailboard_core::{Record, Renderer};

/// Renderer made of child renderers.
///
/// Callers cannot tell a composite from a single renderer: `render` simply
/// forwards the data to every child, in the order the children were added.
pub struct CompositeRenderer<R: Record> {
    children: Vec<Arc<dyn Renderer<R>>>,
}

impl<R: Record> CompositeRenderer<R> {
    pub fn new(children: Vec<Arc<dyn Renderer<R>>>) -> Self {
        Self { children }
    }

    pub fn with_child(mut self, child: Arc<dyn Renderer<R>>) -> Self {
        self.children.push(child);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<R: Record> Default for CompositeRenderer<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: Record> Renderer<R> for CompositeRenderer<R> {
    fn render(&self, data: &[R]) {
        for child in &self.children {
            child.render(data);
        }
    }
}
