use crate::{Notification, NotificationId};

/// Change feed published to [`crate::NotificationCenter`] subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    Posted(Notification),
    Dismissed(NotificationId),
}
