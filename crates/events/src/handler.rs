use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use mailboard_core::{HandlerError, HandlerResult};

/// A subscribed callback.
///
/// Handlers are shared (`Arc`) so the bus can snapshot a topic's handler list
/// and release its lock before invoking anything. Handler identity (for
/// [`EventBus::unsubscribe`](crate::EventBus::unsubscribe)) is pointer identity
/// of the shared allocation: keep a clone of the `Handler` you subscribed if
/// you intend to remove it by identity later.
pub type Handler<M> = Arc<dyn Fn(&M) -> HandlerResult + Send + Sync>;

/// Wrap a fallible closure as a [`Handler`].
pub fn handler<M, F>(f: F) -> Handler<M>
where
    M: 'static,
    F: Fn(&M) -> HandlerResult + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap a closure that cannot fail as a [`Handler`].
pub fn infallible<M, F>(f: F) -> Handler<M>
where
    M: 'static,
    F: Fn(&M) + Send + Sync + 'static,
{
    Arc::new(move |payload: &M| {
        f(payload);
        Ok(())
    })
}

/// Invoke a single handler, turning a panic into a [`HandlerError::Panicked`].
///
/// Dispatch isolation hinges on this: neither an `Err` nor an unwind escapes.
pub(crate) fn invoke<M>(handler: &Handler<M>, payload: &M) -> HandlerResult {
    match panic::catch_unwind(AssertUnwindSafe(|| handler(payload))) {
        Ok(result) => result,
        Err(cause) => Err(HandlerError::panicked(panic_message(cause.as_ref()))),
    }
}

fn panic_message(cause: &(dyn Any + Send)) -> String {
    if let Some(msg) = cause.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = cause.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
