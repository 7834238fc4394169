use crate::{
    DEFAULT_NOTIFICATION_TIMEOUT_MS, Notification, NotificationEvent, NotificationId, Severity,
};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use log::{debug, warn};
use tokio::runtime::Handle;
use tokio::sync::broadcast;

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Process-wide list of transient status messages.
///
/// Items stack in arrival order and each one removes itself after the display
/// timeout. Cloning yields another handle onto the same list.
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<CenterInner>,
}

struct CenterInner {
    items: Mutex<Vec<Notification>>,
    next_id: AtomicU64,
    display_timeout: Duration,
    events: broadcast::Sender<NotificationEvent>,
}

impl NotificationCenter {
    pub fn new(display_timeout: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(CenterInner {
                items: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
                display_timeout,
                events,
            }),
        }
    }

    pub fn display_timeout(&self) -> Duration {
        self.inner.display_timeout
    }

    /// Post a message. It is visible immediately and expires on its own.
    ///
    /// Expiry needs a Tokio runtime; outside one the item stays until
    /// [`dismiss`](Self::dismiss) is called.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let notification = Notification {
            id,
            message: message.into(),
            severity,
            created_at: Utc::now(),
        };

        debug!(
            "Notification {} ({}): {}",
            id, notification.severity, notification.message
        );

        self.items().push(notification.clone());
        let _ = self.inner.events.send(NotificationEvent::Posted(notification));

        match Handle::try_current() {
            Ok(handle) => {
                let center = self.clone();
                let timeout = self.inner.display_timeout;
                handle.spawn(async move {
                    tokio::time::sleep(timeout).await;
                    center.dismiss(id);
                });
            }
            Err(_) => warn!("No async runtime; notification {id} will not auto-expire"),
        }

        id
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.notify(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.notify(message, Severity::Error)
    }

    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.notify(message, Severity::Info)
    }

    /// Remove one item. Returns false when it was already gone.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let removed = {
            let mut items = self.items();
            let before = items.len();
            items.retain(|n| n.id != id);
            items.len() != before
        };

        if removed {
            let _ = self.inner.events.send(NotificationEvent::Dismissed(id));
        }
        removed
    }

    /// Snapshot of the visible items, oldest first.
    pub fn active(&self) -> Vec<Notification> {
        self.items().clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.inner.events.subscribe()
    }

    fn items(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.inner
            .items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_NOTIFICATION_TIMEOUT_MS))
    }
}
