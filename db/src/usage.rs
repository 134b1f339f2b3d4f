use chrono::NaiveDate;
use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::usage::FeatureUsage;

/// Adds `clicks` to the user's counter for `date`, creating the row on first use.
pub async fn upsert_usage<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    date: NaiveDate,
    clicks: i32,
) -> Res<FeatureUsage> {
    sqlx::query_as::<_, FeatureUsage>(
        r#"
        INSERT INTO feature_usage (user_id, date, clicks)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id, date)
        DO UPDATE SET clicks = feature_usage.clicks + EXCLUDED.clicks, updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(date)
    .bind(clicks)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// Rows for `user_id` with `from <= date <= to`, oldest first.
pub async fn get_usage_between<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    user_id: Uuid,
    from: NaiveDate,
    to: NaiveDate,
) -> Res<Vec<FeatureUsage>> {
    sqlx::query_as::<_, FeatureUsage>(
        "SELECT * FROM feature_usage WHERE user_id = $1 AND date BETWEEN $2 AND $3 ORDER BY date ASC",
    )
    .bind(user_id)
    .bind(from)
    .bind(to)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}
