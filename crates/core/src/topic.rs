//! Event topics.

use std::borrow::Cow;

/// Named event channel (e.g. `"model.record.added"`).
///
/// Topics are compared by value. By convention they are namespaced as
/// `<source>.<entity>.<verb>`, but the bus accepts any string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Topic(Cow<'static, str>);

impl Topic {
    /// Build a topic from a string literal (usable in `const` items).
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Topic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
