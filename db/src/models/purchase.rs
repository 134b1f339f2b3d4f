use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct OneTimePurchase {
    pub id: Uuid,
    pub user_id: Uuid,
    pub lemon_squeezy_order_id: String,
    pub variant_id: String,
    pub total: i64,
    pub status: String,
    pub created_at: NaiveDateTime,
}
