use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use uuid::Uuid;

/// Per-user, per-day click counter. At most one row per (user_id, date).
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct FeatureUsage {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub clicks: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
