use lemon::Webhook;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub variant_id: String,
    #[serde(default)]
    pub embed: bool,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub id: String,
    pub store_id: i64,
    pub url: String,
    pub events: Vec<String>,
    pub last_sent_at: Option<String>,
    pub test_mode: bool,
}

impl From<Webhook> for WebhookResponse {
    fn from(webhook: Webhook) -> Self {
        WebhookResponse {
            id: webhook.id,
            store_id: webhook.attributes.store_id,
            url: webhook.attributes.url,
            events: webhook.attributes.events,
            last_sent_at: webhook.attributes.last_sent_at,
            test_mode: webhook.attributes.test_mode,
        }
    }
}
