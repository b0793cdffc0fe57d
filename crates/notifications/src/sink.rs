//! Toast sink contracts and in-memory/no-op adapters.

use std::{cell::RefCell, rc::Rc};

use crate::Toast;

/// Host seam receiving finished toast records.
pub trait ToastSink {
    /// Queues one toast for display.
    fn push(&self, toast: Toast);
}

impl<S: ToastSink + ?Sized> ToastSink for Rc<S> {
    fn push(&self, toast: Toast) {
        (**self).push(toast);
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Sink that drops every toast, for hosts without a notification surface.
pub struct NoopToastSink;

impl ToastSink for NoopToastSink {
    fn push(&self, _toast: Toast) {}
}

#[derive(Debug, Clone, Default)]
/// Shared in-memory queue. Clones observe the same queue.
pub struct ToastQueue {
    inner: Rc<RefCell<Vec<Toast>>>,
}

impl ToastQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the queued toasts, oldest first.
    pub fn snapshot(&self) -> Vec<Toast> {
        self.inner.borrow().clone()
    }

    /// Number of queued toasts.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Removes the toast with `id`. Returns whether one was removed.
    pub fn dismiss(&self, id: u64) -> bool {
        let mut toasts = self.inner.borrow_mut();
        let before = toasts.len();
        toasts.retain(|toast| toast.id != id);
        toasts.len() != before
    }

    /// Removes and returns every queued toast.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.inner.borrow_mut())
    }
}

impl ToastSink for ToastQueue {
    fn push(&self, toast: Toast) {
        self.inner.borrow_mut().push(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ToastKind, ToastOptions, Toaster};
    use pretty_assertions::assert_eq;

    #[test]
    fn queue_clones_share_storage() {
        let queue = ToastQueue::new();
        let toaster = Toaster::new(queue.clone());

        toaster.info("first", ToastOptions::default());
        toaster.error("second", ToastOptions::default());

        let kinds: Vec<_> = queue.snapshot().iter().map(|toast| toast.kind).collect();
        assert_eq!(kinds, vec![ToastKind::Info, ToastKind::Error]);
    }

    #[test]
    fn dismiss_and_drain() {
        let queue = ToastQueue::new();
        let toaster = Toaster::new(queue.clone());
        let first = toaster.success("saved", ToastOptions::default());
        toaster.warning("careful", ToastOptions::default());

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.len(), 1);

        let drained = queue.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].title, "careful");
        assert!(queue.is_empty());
    }

    #[test]
    fn rc_sinks_forward() {
        let queue = Rc::new(ToastQueue::new());
        let toaster = Toaster::new(Rc::clone(&queue));
        toaster.info("hello", ToastOptions::default());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn noop_sink_accepts_everything() {
        let toaster = Toaster::new(NoopToastSink);
        let id = toaster.error("ignored", ToastOptions::default());
        assert_eq!(id, 1);
    }
}
