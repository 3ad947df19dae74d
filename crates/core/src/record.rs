//! Record trait: a single stored value, compared by value.

/// Marker trait for values held by a model's record collection.
///
/// Records have **no identity**: two records with the same value are equal, and
/// removal matches by value (first equal element wins). Duplicates are allowed.
///
/// The `Send + Sync + 'static` bounds let records travel through the shared bus
/// and be mirrored by renderers behind locks.
pub trait Record: Clone + PartialEq + core::fmt::Debug + Send + Sync + 'static {
    /// Whether this value is an empty submission.
    ///
    /// Input boundaries (e.g. a form) publish anything that is not empty,
    /// whitespace included.
    fn is_empty_input(&self) -> bool {
        false
    }
}

impl Record for String {
    fn is_empty_input(&self) -> bool {
        self.is_empty()
    }
}
