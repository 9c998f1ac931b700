use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Append-only per-user activity entry. Rows are never updated or
/// deleted individually; they go away with their owning user.
#[derive(Debug, Clone, FromRow)]
pub struct ActivityLogModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub action: String,
    pub item_name: Option<String>,
    pub quantity_delta: i32,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}
