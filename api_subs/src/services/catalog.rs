use std::collections::HashSet;

use common::{
    env_config::Config,
    error::{AppError, Res},
    lemon::create_client,
};
use lemon::Variant;

use crate::dtos::catalog::{ProductResponse, VariantResponse};

/// Lists every product of the configured store.
pub async fn get_products(config: &Config) -> Res<Vec<ProductResponse>> {
    let settings = config.lemon_settings()?;
    let client = create_client(&settings);

    let products = client.list_products(&settings.store_id).await?;
    log::debug!("Fetched {} products for store {}", products.len(), settings.store_id);

    Ok(products
        .iter()
        .map(|product| ProductResponse::new(product, None))
        .collect())
}

/// Gets a single product together with its variants.
/// Products from other stores are reported as missing.
pub async fn get_product_by_id(
    config: &Config,
    product_id: &str,
    hide_default_variant: bool,
) -> Res<ProductResponse> {
    let settings = config.lemon_settings()?;
    let client = create_client(&settings);

    let found = client.get_product(product_id).await?;
    if found.product.attributes.store_id.to_string() != settings.store_id {
        return Err(AppError::NotFound(format!("Product {} not found", product_id)));
    }

    let variants = visible_variants(found.variants, hide_default_variant)
        .iter()
        .map(VariantResponse::from)
        .collect();

    Ok(ProductResponse::new(&found.product, Some(variants)))
}

/// Lists variants of all products that belong to the configured store.
pub async fn get_all_variants(config: &Config) -> Res<Vec<VariantResponse>> {
    let settings = config.lemon_settings()?;
    let client = create_client(&settings);

    let product_ids: HashSet<String> = client
        .list_products(&settings.store_id)
        .await?
        .into_iter()
        .map(|product| product.id)
        .collect();

    let variants = client.list_variants(None).await?;

    Ok(variants
        .iter()
        .filter(|variant| product_ids.contains(&variant.attributes.product_id.to_string()))
        .map(VariantResponse::from)
        .collect())
}

/// Drops the provider's placeholder variant when asked to.
pub fn visible_variants(variants: Vec<Variant>, hide_default: bool) -> Vec<Variant> {
    if !hide_default {
        return variants;
    }
    variants
        .into_iter()
        .filter(|variant| !variant.is_default())
        .collect()
}
