//! `mailboard-core`: shared building blocks.
//!
//! This crate holds the vocabulary every other crate speaks (topics, records,
//! handler errors) and the two capabilities the controller wires together
//! (`Model`, `Renderer`). It has no bus or drawing concerns.

pub mod error;
pub mod id;
pub mod model;
pub mod record;
pub mod render;
pub mod topic;

pub use error::{HandlerError, HandlerResult};
pub use id::SubscriptionId;
pub use model::Model;
pub use record::Record;
pub use render::Renderer;
pub use topic::Topic;
