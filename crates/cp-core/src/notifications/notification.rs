use crate::Severity;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Monotonic per-center identifier.
pub type NotificationId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}
