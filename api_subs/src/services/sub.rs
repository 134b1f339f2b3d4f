use common::{
    error::Res,
    jwt::{JwtClaims, require_user},
};
use db::models::purchase::OneTimePurchase;
use sqlx::PgPool;

use crate::dtos::sub::UserSubscriptionResponse;

/// Gets the caller's most recent subscription and the plan it is on.
/// Returns None if the user never subscribed.
pub async fn get_subscription_by_user_id(
    pool: &PgPool,
    claims: Option<&JwtClaims>,
) -> Res<Option<UserSubscriptionResponse>> {
    let user = require_user(claims)?;

    let Some(subscription) =
        db::subscription::get_latest_subscription_by_user_id(pool, user.user_id).await?
    else {
        return Ok(None);
    };
    let plan = db::plan::get_plan_by_variant_id(pool, &subscription.variant_id).await?;

    Ok(Some(UserSubscriptionResponse { subscription, plan }))
}

pub async fn get_one_time_purchases(
    pool: &PgPool,
    claims: Option<&JwtClaims>,
) -> Res<Vec<OneTimePurchase>> {
    let user = require_user(claims)?;
    db::purchase::get_purchases_by_user_id(pool, user.user_id).await
}
