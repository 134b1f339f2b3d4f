#[derive(Debug, Clone, PartialEq)]
pub struct PlanCreateRequest {
    pub lemon_squeezy_variant_id: String,
    pub lemon_squeezy_product_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub is_subscription: bool,
    pub interval: Option<String>,
    pub interval_count: Option<i32>,
}
