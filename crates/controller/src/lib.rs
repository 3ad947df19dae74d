//! Coordinator (the controller).

pub mod coordinator;

pub use coordinator::Coordinator;
