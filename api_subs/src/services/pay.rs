use common::{
    env_config::Config,
    error::{AppError, Res},
    jwt::{JwtClaims, require_admin, require_user},
    lemon::create_client,
};
use lemon::{LemonClient, NewCheckout, NewWebhook, WEBHOOK_EVENTS, Webhook};
use serde_json::{Map, Value};

use crate::dtos::pay::{CheckoutRequest, CheckoutResponse, WebhookResponse};

/// Creates a hosted checkout for a variant of the configured store.
/// The caller's id travels in the checkout's custom data so webhooks can be
/// matched back to the user.
pub async fn create_checkout_for_variant(
    config: &Config,
    claims: Option<&JwtClaims>,
    data: CheckoutRequest,
) -> Res<CheckoutResponse> {
    let user = require_user(claims)?;

    let variant_id = data.variant_id.trim();
    if variant_id.is_empty() {
        return Err(AppError::BadRequest("Variant ID is required".to_string()));
    }

    let settings = config.lemon_settings()?;
    let client = create_client(&settings);

    let mut custom = Map::new();
    custom.insert("user_id".to_string(), Value::String(user.user_id.to_string()));

    let checkout = client
        .create_checkout(&NewCheckout {
            store_id: settings.store_id.clone(),
            variant_id: variant_id.to_string(),
            embed: data.embed,
            email: user.email.clone(),
            custom,
            redirect_url: config.lemon.checkout_redirect_url.clone(),
        })
        .await?;

    log::info!("Created checkout {} for user {}", checkout.id, user.user_id);
    Ok(CheckoutResponse {
        url: checkout.attributes.url,
    })
}

/// Gets the store webhook pointing at the configured URL, if any.
pub async fn get_webhook(config: &Config, claims: Option<&JwtClaims>) -> Res<Option<WebhookResponse>> {
    require_admin(claims, "view webhooks")?;
    let settings = config.lemon_settings()?;
    let webhook = config.webhook_settings()?;
    let client = create_client(&settings);

    let found = find_webhook(&client, &settings.store_id, &webhook.url).await?;
    Ok(found.map(WebhookResponse::from))
}

/// Registers the store webhook unless one already points at the configured URL.
pub async fn create_webhook(config: &Config, claims: Option<&JwtClaims>) -> Res<WebhookResponse> {
    let admin = require_admin(claims, "create webhooks")?;
    let settings = config.lemon_settings()?;
    let webhook = config.webhook_settings()?;
    let secret = webhook.require_secret()?;
    let client = create_client(&settings);

    if let Some(existing) = find_webhook(&client, &settings.store_id, &webhook.url).await? {
        log::info!("Webhook {} already registered for {}", existing.id, webhook.url);
        return Ok(existing.into());
    }

    let created = client
        .create_webhook(&NewWebhook {
            store_id: settings.store_id.clone(),
            url: webhook.url.clone(),
            secret: secret.to_string(),
            events: WEBHOOK_EVENTS.iter().map(|event| event.to_string()).collect(),
        })
        .await?;

    log::info!("Webhook {} created by {}", created.id, admin.user_id);
    Ok(created.into())
}

async fn find_webhook(client: &LemonClient, store_id: &str, url: &str) -> Res<Option<Webhook>> {
    let webhooks = client.list_webhooks(store_id).await?;
    Ok(webhooks.into_iter().find(|hook| hook.attributes.url == url))
}
