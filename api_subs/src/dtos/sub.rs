use db::models::{plan::Plan, subscription::Subscription};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserSubscriptionResponse {
    pub subscription: Subscription,
    pub plan: Option<Plan>,
}
