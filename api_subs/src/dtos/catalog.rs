use lemon::{Product, Variant};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    #[serde(default)]
    pub hide_default_variant: bool,
}

#[derive(Debug, Serialize)]
pub struct VariantResponse {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub is_subscription: bool,
    pub interval: Option<String>,
    pub interval_count: Option<i32>,
    pub has_free_trial: bool,
    pub status: String,
}

impl From<&Variant> for VariantResponse {
    fn from(variant: &Variant) -> Self {
        let attrs = &variant.attributes;
        VariantResponse {
            id: variant.id.clone(),
            product_id: attrs.product_id.to_string(),
            name: attrs.name.clone(),
            description: attrs.description.clone(),
            price: attrs.price,
            is_subscription: attrs.is_subscription,
            interval: attrs.interval.clone(),
            interval_count: attrs.interval_count,
            has_free_trial: attrs.has_free_trial,
            status: attrs.status.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub status: String,
    pub price: i64,
    pub price_formatted: Option<String>,
    pub buy_now_url: Option<String>,
    pub test_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<VariantResponse>>,
}

impl ProductResponse {
    pub fn new(product: &Product, variants: Option<Vec<VariantResponse>>) -> Self {
        let attrs = &product.attributes;
        ProductResponse {
            id: product.id.clone(),
            name: attrs.name.clone(),
            slug: attrs.slug.clone(),
            description: attrs.description.clone(),
            status: attrs.status.clone(),
            price: attrs.price,
            price_formatted: attrs.price_formatted.clone(),
            buy_now_url: attrs.buy_now_url.clone(),
            test_mode: attrs.test_mode,
            variants,
        }
    }
}
