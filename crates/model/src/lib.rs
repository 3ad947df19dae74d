//! Record store (the model).

pub mod store;

pub use store::Store;
