use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

/// Local mirror of a provider variant that can be sold.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Plan {
    pub id: Uuid,
    pub lemon_squeezy_variant_id: String,
    pub lemon_squeezy_product_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub is_subscription: bool,
    pub interval: Option<String>,
    pub interval_count: Option<i32>,
    pub created_at: NaiveDateTime,
}
