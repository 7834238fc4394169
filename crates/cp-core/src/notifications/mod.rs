pub mod notification;
pub mod notification_center;
pub mod notification_event;
pub mod severity;

pub use notification::{Notification, NotificationId};
pub use notification_center::NotificationCenter;
pub use notification_event::NotificationEvent;
pub use severity::Severity;
