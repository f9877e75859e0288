use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

const SUCCESS_TTL: Duration = Duration::from_secs(4);
const WARNING_TTL: Duration = Duration::from_secs(6);
const ERROR_TTL: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

/// A user-facing message with a display lifetime. Delivered over a
/// per-session channel and consumed exactly once; there is no shared mutable
/// message slot read by multiple components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub content: String,
    pub ttl: Duration,
}

impl Notification {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            content: content.into(),
            ttl: SUCCESS_TTL,
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            content: content.into(),
            ttl: WARNING_TTL,
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            content: content.into(),
            ttl: ERROR_TTL,
        }
    }
}

/// Session-scoped notification channel. The UI shell owns the receiving end
/// and drains it on its own cadence.
pub struct NotificationBus {
    sender: UnboundedSender<Notification>,
}

impl NotificationBus {
    pub fn channel() -> (Self, UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn publish(&self, notification: Notification) {
        if self.sender.send(notification).is_err() {
            debug!("Notification receiver dropped, message discarded");
        }
    }

    pub fn success(&self, content: impl Into<String>) {
        self.publish(Notification::success(content));
    }

    pub fn warning(&self, content: impl Into<String>) {
        self.publish(Notification::warning(content));
    }

    pub fn error(&self, content: impl Into<String>) {
        self.publish(Notification::error(content));
    }
}
