use db::models::usage::FeatureUsage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SpendRequest {
    pub amount: i32,
}

#[derive(Debug, Serialize)]
pub struct UsageSummary {
    pub today_clicks: i64,
    pub month_clicks: i64,
    /// Daily rows of the current month, oldest first.
    pub days: Vec<FeatureUsage>,
}
