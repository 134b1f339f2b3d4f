use chrono::{Datelike, NaiveDate, Utc};
use common::{
    error::{AppError, Res},
    jwt::{JwtClaims, require_user},
};
use db::models::usage::FeatureUsage;
use sqlx::PgPool;

use crate::dtos::usage::{SpendRequest, UsageSummary};

/// Records `amount` clicks against today's counter of the caller.
pub async fn spend_credits(
    pool: &PgPool,
    claims: Option<&JwtClaims>,
    data: SpendRequest,
) -> Res<FeatureUsage> {
    let user = require_user(claims)?;
    if data.amount <= 0 {
        return Err(AppError::BadRequest(
            "Amount must be a positive number".to_string(),
        ));
    }

    let today = Utc::now().date_naive();

    let mut tx = pool.begin().await?;
    let usage = db::usage::upsert_usage(&mut *tx, user.user_id, today, data.amount).await?;
    tx.commit().await?;

    log::debug!(
        "User {} spent {} credits, {} today",
        user.user_id,
        data.amount,
        usage.clicks
    );
    Ok(usage)
}

/// Gets today's and this month's usage of the caller.
pub async fn get_usage_for_user(pool: &PgPool, claims: Option<&JwtClaims>) -> Res<UsageSummary> {
    let user = require_user(claims)?;
    let today = Utc::now().date_naive();

    let rows = db::usage::get_usage_between(pool, user.user_id, month_start(today), today).await?;
    Ok(summarize(rows, today))
}

/// First day of the month `day` falls in.
pub fn month_start(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

/// Folds the month's daily rows into totals.
pub fn summarize(days: Vec<FeatureUsage>, today: NaiveDate) -> UsageSummary {
    let today_clicks = days
        .iter()
        .filter(|row| row.date == today)
        .map(|row| i64::from(row.clicks))
        .sum();
    let month_clicks = days
        .iter()
        .filter(|row| row.date >= month_start(today) && row.date <= today)
        .map(|row| i64::from(row.clicks))
        .sum();

    UsageSummary {
        today_clicks,
        month_clicks,
        days,
    }
}
