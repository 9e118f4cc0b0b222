//! Global toast queue, backed by a yewdux store.

use yewdux::prelude::*;

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Green confirmation.
    Success,
    /// Red failure notice.
    Error,
}

/// One transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Queue-local identifier, used for dismissal.
    pub id: u32,
    /// Success or error styling.
    pub kind: ToastKind,
    /// Text shown to the user.
    pub message: String,
}

/// The queue of currently visible toasts.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u32,
}

impl ToastQueue {
    /// Toasts in display order, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Append a success toast.
    pub fn success(&mut self, message: impl Into<String>) -> u32 {
        self.push(ToastKind::Success, message)
    }

    /// Append an error toast.
    pub fn error(&mut self, message: impl Into<String>) -> u32 {
        self.push(ToastKind::Error, message)
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_distinct_ids() {
        let mut queue = ToastQueue::default();
        let first = queue.success("saved");
        let second = queue.error("failed");
        assert_ne!(first, second);
        assert_eq!(queue.toasts().len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_the_target() {
        let mut queue = ToastQueue::default();
        let first = queue.success("one");
        let second = queue.success("two");
        queue.dismiss(first);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);
    }

    #[test]
    fn test_dismiss_unknown_id_is_inert() {
        let mut queue = ToastQueue::default();
        queue.success("one");
        queue.dismiss(999);
        assert_eq!(queue.toasts().len(), 1);
    }

    #[test]
    fn test_display_order_is_oldest_first() {
        let mut queue = ToastQueue::default();
        queue.success("first");
        queue.error("second");
        assert_eq!(queue.toasts()[0].message, "first");
        assert_eq!(queue.toasts()[1].message, "second");
    }
}
