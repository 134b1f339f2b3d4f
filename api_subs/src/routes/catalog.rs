use actix_web::{Responder, get, post, web};
use common::{env_config::Config, error::Res, http::Success, jwt::JwtClaims};
use sqlx::PgPool;
use std::sync::Arc;

use crate::{dtos::catalog::ProductQuery, services};

/// Retrieves all products of the configured Lemon Squeezy store.
///
/// # Input
/// - `config`: Application configuration with Lemon Squeezy credentials
///
/// # Output
/// - Success: JSON array of products (without variants)
/// - Error: 500 when the store is not configured, 502 when Lemon Squeezy fails
#[get("/products")]
pub async fn get_products(config: web::Data<Arc<Config>>) -> Res<impl Responder> {
    let products = services::catalog::get_products(&config).await?;
    Success::ok(products)
}

/// Retrieves a product with its variants.
///
/// # Input
/// - `path`: Lemon Squeezy product ID
/// - `query.hide_default_variant`: when `true`, the placeholder variant is left out
///
/// # Output
/// - Success: The product with a `variants` array
/// - Error: 404 if the product does not exist in the store
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/catalog/products/12345?hide_default_variant=true');
/// const product = await response.json();
/// product.variants.forEach(v => console.log(v.name, v.price));
/// ```
#[get("/products/{product_id}")]
pub async fn get_product(
    config: web::Data<Arc<Config>>,
    path: web::Path<String>,
    query: web::Query<ProductQuery>,
) -> Res<impl Responder> {
    let product = services::catalog::get_product_by_id(
        &config,
        &path.into_inner(),
        query.hide_default_variant,
    )
    .await?;
    Success::ok(product)
}

/// Retrieves every variant sold by the configured store.
#[get("/variants")]
pub async fn get_variants(config: web::Data<Arc<Config>>) -> Res<impl Responder> {
    let variants = services::catalog::get_all_variants(&config).await?;
    Success::ok(variants)
}

/// Lists the local plans, cheapest first.
#[get("/plans")]
pub async fn get_plans(pool: web::Data<Arc<PgPool>>) -> Res<impl Responder> {
    let plans = services::plan::get_plans(&pool).await?;
    Success::ok(plans)
}

/// Creates local plans from the store's variants. Admin only.
///
/// # Input
/// - `claims`: JWT claims, role must be `admin`
///
/// # Output
/// - Success: 201 with `{ created: [...plans], skipped: number }`
/// - Error: 401 without a token, 403 for non-admins
#[post("/plans/sync")]
pub async fn post_sync_plans(
    claims: Option<web::ReqData<JwtClaims>>,
    config: web::Data<Arc<Config>>,
    pool: web::Data<Arc<PgPool>>,
) -> Res<impl Responder> {
    let result =
        services::plan::create_plans_from_variants(&pool, &config, claims.as_deref()).await?;
    Success::created(result)
}
