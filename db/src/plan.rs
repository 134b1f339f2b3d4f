use common::error::{AppError, Res};
use sqlx::{Executor, Postgres};

use crate::{dtos::plan::PlanCreateRequest, models::plan::Plan};

pub async fn get_plans<'e, E: Executor<'e, Database = Postgres>>(executor: E) -> Res<Vec<Plan>> {
    sqlx::query_as::<_, Plan>("SELECT * FROM plans ORDER BY price ASC, name ASC")
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_plan_by_variant_id<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    variant_id: &str,
) -> Res<Option<Plan>> {
    sqlx::query_as::<_, Plan>("SELECT * FROM plans WHERE lemon_squeezy_variant_id = $1")
        .bind(variant_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// External variant ids that already have a local plan.
pub async fn get_variant_ids<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
) -> Res<Vec<String>> {
    sqlx::query_scalar::<_, String>("SELECT lemon_squeezy_variant_id FROM plans")
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

/// Inserts a plan unless one already mirrors the same variant.
/// Returns `None` when the row already existed.
pub async fn insert_plan<'e, E: Executor<'e, Database = Postgres>>(
    executor: E,
    data: PlanCreateRequest,
) -> Res<Option<Plan>> {
    sqlx::query_as::<_, Plan>(
        r#"
        INSERT INTO plans (lemon_squeezy_variant_id, lemon_squeezy_product_id, name, description, price, is_subscription, interval, interval_count)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (lemon_squeezy_variant_id) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(data.lemon_squeezy_variant_id)
    .bind(data.lemon_squeezy_product_id)
    .bind(data.name)
    .bind(data.description)
    .bind(data.price)
    .bind(data.is_subscription)
    .bind(data.interval)
    .bind(data.interval_count)
    .fetch_optional(executor)
    .await
    .map_err(AppError::from)
}
