use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use mailboard_events::SubscriptionHandle;

/// One-shot lifecycle shared by leaf renderers.
///
/// A leaf mounts its static structure on the first render and binds its bus
/// subscriptions exactly once; later renders only redraw.
#[derive(Debug, Default)]
pub(crate) struct LeafLifecycle {
    mounted: AtomicBool,
    bindings: OnceLock<Vec<SubscriptionHandle>>,
}

impl LeafLifecycle {
    /// Run `mount` on the first call only.
    pub(crate) fn mount_once(&self, mount: impl FnOnce()) {
        if !self.mounted.swap(true, Ordering::AcqRel) {
            mount();
        }
    }

    /// Run `bind` on the first call only and keep the resulting handles.
    pub(crate) fn bind_once(&self, bind: impl FnOnce() -> Vec<SubscriptionHandle>) {
        self.bindings.get_or_init(bind);
    }

    pub(crate) fn bindings(&self) -> &[SubscriptionHandle] {
        self.bindings.get().map_or(&[], Vec::as_slice)
    }
}
