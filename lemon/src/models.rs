use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON:API resource object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource<A> {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: A,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Document<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub included: Vec<Value>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Meta {
    pub page: Option<PageMeta>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductAttributes {
    pub store_id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub price_formatted: Option<String>,
    #[serde(default)]
    pub buy_now_url: Option<String>,
    #[serde(default)]
    pub test_mode: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantAttributes {
    pub product_id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub is_subscription: bool,
    #[serde(default)]
    pub interval: Option<String>,
    #[serde(default)]
    pub interval_count: Option<i32>,
    #[serde(default)]
    pub has_free_trial: bool,
    pub status: String,
    #[serde(default)]
    pub sort: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookAttributes {
    pub store_id: i64,
    pub url: String,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub last_sent_at: Option<String>,
    #[serde(default)]
    pub test_mode: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutAttributes {
    pub store_id: i64,
    pub variant_id: i64,
    pub url: String,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub test_mode: bool,
}

pub type Product = Resource<ProductAttributes>;
pub type Variant = Resource<VariantAttributes>;
pub type Webhook = Resource<WebhookAttributes>;
pub type Checkout = Resource<CheckoutAttributes>;

#[derive(Debug, Clone)]
pub struct ProductWithVariants {
    pub product: Product,
    pub variants: Vec<Variant>,
}

#[derive(Debug, Clone, Default)]
pub struct NewCheckout {
    pub store_id: String,
    pub variant_id: String,
    pub embed: bool,
    pub email: Option<String>,
    pub custom: Map<String, Value>,
    pub redirect_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewWebhook {
    pub store_id: String,
    pub url: String,
    pub secret: String,
    pub events: Vec<String>,
}

impl Variant {
    /// The provider's implicit default variant, shown only when a product
    /// has no explicit variants.
    pub fn is_default(&self) -> bool {
        self.attributes.status == crate::DEFAULT_VARIANT_STATUS
    }
}
