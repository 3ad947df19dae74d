//! Model capability: the single point of mutation for a record collection.

use crate::record::Record;

/// Ordered record collection that announces its mutations.
///
/// Implementations own their collection exclusively. Methods take `&self` so a
/// model can be shared (`Arc<dyn Model<R>>`) with the handlers that mutate it;
/// interior state must be guarded and never locked while announcing a change,
/// since announcements may re-enter the model.
pub trait Model<R: Record>: Send + Sync {
    /// Prepend `record` and announce the addition.
    fn add(&self, record: R);

    /// Delete the first element equal to `record` and announce the removal.
    ///
    /// Returns `false` (and announces nothing) when no element matches.
    fn remove(&self, record: &R) -> bool;

    /// Snapshot of the current collection, newest first.
    fn get_all(&self) -> Vec<R>;
}
