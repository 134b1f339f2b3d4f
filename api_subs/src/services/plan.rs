use std::collections::HashSet;

use common::{
    env_config::Config,
    error::Res,
    jwt::{JwtClaims, require_admin},
    lemon::create_client,
};
use db::{dtos::plan::PlanCreateRequest, models::plan::Plan};
use lemon::ProductWithVariants;
use sqlx::PgPool;

use crate::dtos::plan::PlanSyncResponse;

const DEFAULT_VARIANT_NAME: &str = "Default";

/// Lists the locally mirrored plans, cheapest first.
pub async fn get_plans(pool: &PgPool) -> Res<Vec<Plan>> {
    db::plan::get_plans(pool).await
}

/// Mirrors provider variants of the configured store into the `plans` table.
///
/// Default variants and variants that already have a plan are skipped, so the
/// sync can be repeated safely.
pub async fn create_plans_from_variants(
    pool: &PgPool,
    config: &Config,
    claims: Option<&JwtClaims>,
) -> Res<PlanSyncResponse> {
    let admin = require_admin(claims, "sync plans")?;
    let settings = config.lemon_settings()?;
    let client = create_client(&settings);

    let products = client.list_products(&settings.store_id).await?;
    let mut catalog = Vec::with_capacity(products.len());
    for product in products {
        let variants = client.list_variants(Some(&product.id)).await?;
        catalog.push(ProductWithVariants { product, variants });
    }

    let existing: HashSet<String> = db::plan::get_variant_ids(pool).await?.into_iter().collect();
    let (new_plans, mut skipped) = select_new_plans(&existing, &catalog);

    let mut created = Vec::with_capacity(new_plans.len());
    for data in new_plans {
        match db::plan::insert_plan(pool, data).await? {
            Some(plan) => created.push(plan),
            // inserted concurrently by another sync
            None => skipped += 1,
        }
    }

    log::info!(
        "Plan sync by {} created {} plans, skipped {}",
        admin.user_id,
        created.len(),
        skipped
    );
    Ok(PlanSyncResponse { created, skipped })
}

/// Picks the variants that still need a plan.
/// Returns the plans to insert and how many variants were skipped.
pub fn select_new_plans(
    existing: &HashSet<String>,
    catalog: &[ProductWithVariants],
) -> (Vec<PlanCreateRequest>, usize) {
    let mut plans = Vec::new();
    let mut skipped = 0;

    for entry in catalog {
        let product = &entry.product;
        for variant in &entry.variants {
            if variant.is_default() || existing.contains(&variant.id) {
                skipped += 1;
                continue;
            }

            let attrs = &variant.attributes;
            let name = if attrs.name.eq_ignore_ascii_case(DEFAULT_VARIANT_NAME) {
                product.attributes.name.clone()
            } else {
                format!("{} - {}", product.attributes.name, attrs.name)
            };

            plans.push(PlanCreateRequest {
                lemon_squeezy_variant_id: variant.id.clone(),
                lemon_squeezy_product_id: product.id.clone(),
                name,
                description: attrs
                    .description
                    .clone()
                    .or_else(|| product.attributes.description.clone()),
                price: attrs.price,
                is_subscription: attrs.is_subscription,
                interval: attrs.interval.clone(),
                interval_count: attrs.interval_count,
            });
        }
    }

    (plans, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lemon::{
        Resource,
        models::{ProductAttributes, VariantAttributes},
    };

    fn product(id: &str, name: &str) -> lemon::Product {
        Resource {
            id: id.to_string(),
            kind: "products".to_string(),
            attributes: ProductAttributes {
                store_id: 7,
                name: name.to_string(),
                slug: None,
                description: Some("Product description".to_string()),
                status: "published".to_string(),
                price: 0,
                price_formatted: None,
                buy_now_url: None,
                test_mode: true,
            },
        }
    }

    fn variant(id: &str, name: &str, status: &str) -> lemon::Variant {
        Resource {
            id: id.to_string(),
            kind: "variants".to_string(),
            attributes: VariantAttributes {
                product_id: 1,
                name: name.to_string(),
                slug: None,
                description: None,
                price: 999,
                is_subscription: true,
                interval: Some("month".to_string()),
                interval_count: Some(1),
                has_free_trial: false,
                status: status.to_string(),
                sort: 0,
            },
        }
    }

    #[test]
    fn skips_default_and_existing_variants() {
        let catalog = vec![ProductWithVariants {
            product: product("1", "Pro"),
            variants: vec![
                variant("10", "Default", "pending"),
                variant("11", "Monthly", "published"),
                variant("12", "Yearly", "published"),
            ],
        }];
        let existing = HashSet::from(["12".to_string()]);

        let (plans, skipped) = select_new_plans(&existing, &catalog);

        assert_eq!(skipped, 2);
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].lemon_squeezy_variant_id, "11");
        assert_eq!(plans[0].lemon_squeezy_product_id, "1");
        assert_eq!(plans[0].name, "Pro - Monthly");
        assert_eq!(plans[0].price, 999);
        assert_eq!(plans[0].interval.as_deref(), Some("month"));
    }

    #[test]
    fn published_default_variant_takes_product_name() {
        let catalog = vec![ProductWithVariants {
            product: product("2", "Lifetime"),
            variants: vec![variant("20", "Default", "published")],
        }];

        let (plans, skipped) = select_new_plans(&HashSet::new(), &catalog);

        assert_eq!(skipped, 0);
        assert_eq!(plans[0].name, "Lifetime");
        assert_eq!(plans[0].description.as_deref(), Some("Product description"));
    }

    #[test]
    fn empty_catalog_selects_nothing() {
        let (plans, skipped) = select_new_plans(&HashSet::new(), &[]);
        assert!(plans.is_empty());
        assert_eq!(skipped, 0);
    }
}
