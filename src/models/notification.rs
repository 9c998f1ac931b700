use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct NotificationModel {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub title: String,
    pub message: String,
    pub kind: String,
    pub priority: String,
    pub item_category: String,
    pub item_name: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Alert condition detected by the scanner. One unread notification per
/// (recipient, item, kind) triple per 24h window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    StockLow,
    StockCritical,
    ExpiryNear,
    ExpiryCritical,
    Expired,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::StockLow => "stock_low",
            NotificationKind::StockCritical => "stock_critical",
            NotificationKind::ExpiryNear => "expiry_near",
            NotificationKind::ExpiryCritical => "expiry_critical",
            NotificationKind::Expired => "expired",
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            NotificationKind::StockCritical
            | NotificationKind::ExpiryCritical
            | NotificationKind::Expired => Priority::High,
            NotificationKind::StockLow => Priority::Medium,
            NotificationKind::ExpiryNear => Priority::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_priorities() {
        assert_eq!(NotificationKind::StockCritical.priority(), Priority::High);
        assert_eq!(NotificationKind::Expired.priority(), Priority::High);
        assert_eq!(NotificationKind::ExpiryCritical.priority(), Priority::High);
        assert_eq!(NotificationKind::StockLow.priority(), Priority::Medium);
        assert_eq!(NotificationKind::ExpiryNear.priority(), Priority::Low);
    }
}
