use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::purchase::OneTimePurchase;

pub async fn get_purchases_by_user_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
) -> Res<Vec<OneTimePurchase>> {
    sqlx::query_as::<_, OneTimePurchase>(
        "SELECT * FROM one_time_purchases WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}
