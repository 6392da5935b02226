//! Transient user-facing notifications raised by mutations.

use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub detail: Option<String>,
}

impl Notification {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            detail: None,
        }
    }

    pub fn error(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            detail: Some(detail.into()),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Sink for mutation outcomes (a toast, a status line, stderr).
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Forwards notifications to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => tracing::info!(title = %notification.title, "notification"),
            NotificationKind::Error => tracing::warn!(
                title = %notification.title,
                detail = notification.detail.as_deref().unwrap_or_default(),
                "notification",
            ),
        }
    }
}

/// Keeps notifications in memory until drained.
#[derive(Debug, Default)]
pub struct BufferedNotifier {
    buffer: Mutex<Vec<Notification>>,
}

impl BufferedNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything raised so far, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.buffer.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for BufferedNotifier {
    fn notify(&self, notification: Notification) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffered_notifier_drains_in_order() {
        let notifier = BufferedNotifier::new();
        notifier.notify(Notification::success("Enrolled"));
        notifier.notify(Notification::error("Could not enroll", "API error (409): full"));

        let drained = notifier.drain();
        assert_eq!(drained.len(), 2);
        assert!(!drained[0].is_error());
        assert!(drained[1].is_error());
        assert!(notifier.drain().is_empty());
    }
}
