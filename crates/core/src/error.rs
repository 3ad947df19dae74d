//! Handler error model.

use thiserror::Error;

/// Result type returned by bus handlers.
pub type HandlerResult = Result<(), HandlerError>;

/// Failure raised while a handler processes a published payload.
///
/// The bus never propagates these to the publisher: each failure is logged and
/// dispatch moves on to the next handler registered under the same topic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// The handler accepted the payload but could not complete its work.
    #[error("handler failed: {0}")]
    Failed(String),

    /// The handler panicked; the bus caught the unwind.
    #[error("handler panicked: {0}")]
    Panicked(String),
}

impl HandlerError {
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }

    pub fn panicked(msg: impl Into<String>) -> Self {
        Self::Panicked(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        assert_eq!(
            HandlerError::failed("chart redraw: surface detached").to_string(),
            "handler failed: chart redraw: surface detached"
        );
        assert_eq!(
            HandlerError::panicked("boom").to_string(),
            "handler panicked: boom"
        );
    }
}
