use actix_web::{Responder, get, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use sqlx::PgPool;
use std::sync::Arc;

use crate::services;

/// Retrieves the authenticated user's latest subscription.
///
/// # Input
/// - `claims`: JWT claims identifying the user
/// - `pool`: Database connection pool
///
/// # Output
/// - Success: The subscription with its local plan, or `null` if the user never subscribed
/// - Error: 401 Unauthorized without a valid token
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/sub/current', {
///   headers: {
///     'Authorization': `Bearer ${localStorage.getItem('authToken')}`
///   }
/// });
///
/// const data = await response.json();
/// if (data) {
///   console.log(`${data.plan?.name} (${data.subscription.status})`);
/// }
/// ```
#[get("/current")]
pub async fn get_current(
    claims: Option<web::ReqData<JwtClaims>>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let subscription = services::sub::get_subscription_by_user_id(&pool, claims.as_deref()).await?;
    Success::ok(subscription)
}

/// Lists the authenticated user's one-time purchases, newest first.
#[get("/purchases")]
pub async fn get_purchases(
    claims: Option<web::ReqData<JwtClaims>>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let purchases = services::sub::get_one_time_purchases(&pool, claims.as_deref()).await?;
    Success::ok(purchases)
}
