use actix_web::{Responder, get, post, web};
use common::{error::Res, http::Success, jwt::JwtClaims};
use sqlx::PgPool;
use std::sync::Arc;

use crate::{dtos::usage::SpendRequest, services};

/// Spends credits of the authenticated user.
///
/// # Input
/// - `claims`: JWT claims identifying the user
/// - `req`: JSON payload with a positive `amount`
///
/// # Output
/// - Success: Today's usage row after the increment
/// - Error: 400 for a non-positive amount, 401 without a token
///
/// # Frontend Example
/// ```javascript
/// await fetch('/api/usage/spend', {
///   method: 'POST',
///   headers: {
///     'Content-Type': 'application/json',
///     'Authorization': `Bearer ${localStorage.getItem('authToken')}`
///   },
///   body: JSON.stringify({ amount: 1 })
/// });
/// ```
#[post("/spend")]
pub async fn post_spend(
    claims: Option<web::ReqData<JwtClaims>>,
    pool: web::Data<Arc<PgPool>>,
    req: web::Json<SpendRequest>,
) -> Res<impl Responder> {
    let usage = services::usage::spend_credits(&pool, claims.as_deref(), req.into_inner()).await?;
    Success::ok(usage)
}

/// Usage of the authenticated user: today, this month, and per day.
#[get("/summary")]
pub async fn get_summary(
    claims: Option<web::ReqData<JwtClaims>>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let summary = services::usage::get_usage_for_user(&pool, claims.as_deref()).await?;
    Success::ok(summary)
}
