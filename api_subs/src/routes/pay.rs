use actix_web::{Responder, get, post, web};
use common::{env_config::Config, error::Res, http::Success, jwt::JwtClaims};
use std::sync::Arc;

use crate::{dtos::pay::CheckoutRequest, services};

/// Creates a Lemon Squeezy checkout for a variant.
///
/// # Input
/// - `claims`: JWT claims of the buyer
/// - `req`: JSON payload with:
///   - `variant_id`: Lemon Squeezy variant ID
///   - `embed`: optional, `true` for the overlay checkout
///
/// # Output
/// - Success: `{ url: "https://..." }` pointing at the hosted checkout
/// - Error: 401 without a token, 502 when Lemon Squeezy rejects the checkout
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/pay/checkout', {
///   method: 'POST',
///   headers: {
///     'Content-Type': 'application/json',
///     'Authorization': `Bearer ${localStorage.getItem('authToken')}`
///   },
///   body: JSON.stringify({ variant_id: "123456", embed: true })
/// });
///
/// const { url } = await response.json();
/// window.LemonSqueezy.Url.Open(url);
/// ```
#[post("/checkout")]
pub async fn post_checkout(
    claims: Option<web::ReqData<JwtClaims>>,
    config: web::Data<Arc<Config>>,
    req: web::Json<CheckoutRequest>,
) -> Res<impl Responder> {
    let checkout =
        services::pay::create_checkout_for_variant(&config, claims.as_deref(), req.into_inner())
            .await?;
    Success::created(checkout)
}

/// Gets the registered store webhook, or `null`. Admin only.
#[get("/webhook")]
pub async fn get_webhook(
    claims: Option<web::ReqData<JwtClaims>>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    let webhook = services::pay::get_webhook(&config, claims.as_deref()).await?;
    Success::ok(webhook)
}

/// Registers the store webhook if it is not registered yet. Admin only.
///
/// # Output
/// - Success: The existing or newly created webhook
/// - Error: 403 for non-admins, 500 if the webhook URL or secret is not configured
#[post("/webhook")]
pub async fn post_webhook(
    claims: Option<web::ReqData<JwtClaims>>,
    config: web::Data<Arc<Config>>,
) -> Res<impl Responder> {
    let webhook = services::pay::create_webhook(&config, claims.as_deref()).await?;
    Success::ok(webhook)
}
