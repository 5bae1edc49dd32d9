//! Toast notifications.
//!
//! Each notification gets a unique id when pushed. Removal is always by id
//! and is a no-op if the notification is already gone, so the auto-dismiss
//! timer and a manual close never conflict.

use async_trait::async_trait;
use std::cell::RefCell;
use std::fmt;

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Danger => "danger",
        }
    }

    /// CSS class for the alert box, e.g. `alert-danger`.
    pub fn css_class(&self) -> String {
        format!("alert-{}", self.as_str())
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier handed out by [`NotificationQueue::push`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
}

/// Notifications currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Remove a notification. Returns `false` if it was already removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self.items.iter().position(|n| n.id == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.items.iter().any(|n| n.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One-shot delay, provided by the host runtime.
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep_ms(&self, ms: u32);
}

/// Somewhere notifications are shown and removed.
pub trait NotificationSink {
    fn notify(&self, message: String, kind: NotificationKind) -> NotificationId;
    /// Returns `false` if the notification was already gone.
    fn dismiss(&self, id: NotificationId) -> bool;
}

impl NotificationSink for RefCell<NotificationQueue> {
    fn notify(&self, message: String, kind: NotificationKind) -> NotificationId {
        self.borrow_mut().push(message, kind)
    }

    fn dismiss(&self, id: NotificationId) -> bool {
        self.borrow_mut().dismiss(id)
    }
}

/// Wait `timeout_ms`, then remove notification `id` if it is still shown.
///
/// Returns whether this call removed it.
pub async fn expire_after<S, T>(
    sink: &S,
    timer: &T,
    id: NotificationId,
    timeout_ms: u32,
) -> bool
where
    S: NotificationSink + ?Sized,
    T: Timer + ?Sized,
{
    timer.sleep_ms(timeout_ms).await;
    let removed = sink.dismiss(id);
    if !removed {
        log::debug!("Notification {:?} already removed", id);
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct TokioTimer;

    #[async_trait(?Send)]
    impl Timer for TokioTimer {
        async fn sleep_ms(&self, ms: u32) {
            tokio::time::sleep(Duration::from_millis(u64::from(ms))).await;
        }
    }

    #[test]
    fn test_push_assigns_unique_ids() {
        let mut queue = NotificationQueue::new();
        let a = queue.push("uno", NotificationKind::Info);
        let b = queue.push("dos", NotificationKind::Success);
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);
        let messages: Vec<_> = queue.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["uno", "dos"]);
    }

    #[test]
    fn test_dismiss_twice_is_safe() {
        let mut queue = NotificationQueue::new();
        let id = queue.push("hola", NotificationKind::Danger);

        // manual close, then the timer fires
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_are_not_reused_after_dismiss() {
        let mut queue = NotificationQueue::new();
        let first = queue.push("a", NotificationKind::Info);
        queue.dismiss(first);
        let second = queue.push("b", NotificationKind::Info);
        assert_ne!(first, second);
        // a stale timer for `first` must not remove `second`
        assert!(!queue.dismiss(first));
        assert!(queue.contains(second));
    }

    #[test]
    fn test_css_class() {
        assert_eq!(NotificationKind::Danger.css_class(), "alert-danger");
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_expires_after_timeout() {
        let queue = RefCell::new(NotificationQueue::new());
        let id = queue.notify(
            "Datos actualizados correctamente".to_string(),
            NotificationKind::Success,
        );

        let expiry = expire_after(&queue, &TokioTimer, id, 5000);
        let still_shown = async {
            tokio::time::sleep(Duration::from_millis(4900)).await;
            queue.borrow().contains(id)
        };
        let (removed, shown_at_4900) = tokio::join!(expiry, still_shown);

        assert!(shown_at_4900);
        assert!(removed);
        assert!(queue.borrow().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiry_after_manual_dismiss_is_noop() {
        let queue = RefCell::new(NotificationQueue::new());
        let id = queue.notify(
            "Error al actualizar datos: X".to_string(),
            NotificationKind::Danger,
        );
        let other = queue.notify("otra".to_string(), NotificationKind::Info);

        let expiry = expire_after(&queue, &TokioTimer, id, 5000);
        let close_by_hand = async {
            tokio::time::sleep(Duration::from_millis(1000)).await;
            queue.dismiss(id)
        };
        let (removed_by_timer, removed_by_hand) = tokio::join!(expiry, close_by_hand);

        assert!(removed_by_hand);
        assert!(!removed_by_timer);
        assert!(queue.borrow().contains(other));
    }
}
