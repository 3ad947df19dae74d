//! Wire topics shared by models, renderers, and controllers.
//!
//! Existing collaborators depend on these exact strings.

use mailboard_core::Topic;

pub const MODEL_RECORD_ADDED: Topic = Topic::from_static("model.record.added");
pub const MODEL_RECORD_REMOVED: Topic = Topic::from_static("model.record.removed");
pub const VIEW_INTENT_ADD: Topic = Topic::from_static("view.intent.add");
pub const VIEW_INTENT_REMOVE: Topic = Topic::from_static("view.intent.remove");
