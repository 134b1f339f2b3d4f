use log::debug;
use reqwest::{
    Method, RequestBuilder,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::{
    error::LemonError,
    models::{
        Checkout, Document, NewCheckout, NewWebhook, Product, ProductWithVariants, Resource,
        Variant, Webhook,
    },
};

pub const DEFAULT_API_URL: &str = "https://api.lemonsqueezy.com";

const JSON_API: &str = "application/vnd.api+json";
const PAGE_SIZE: u32 = 100;

#[derive(Clone)]
pub struct LemonClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LemonClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, DEFAULT_API_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        LemonClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}/v1/{}", self.base_url, path))
            .bearer_auth(&self.api_key)
            .header(ACCEPT, JSON_API)
            .header(CONTENT_TYPE, JSON_API)
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<Document<T>, LemonError> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LemonError::from_response(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(LemonError::from)
    }

    /// Walks every page of a collection endpoint.
    async fn list_all<A: DeserializeOwned>(
        &self,
        path: &str,
        filters: &[(&str, String)],
    ) -> Result<Vec<Resource<A>>, LemonError> {
        let mut items = Vec::new();
        let mut page: u32 = 1;

        loop {
            let mut query: Vec<(String, String)> = filters
                .iter()
                .map(|(key, value)| (format!("filter[{}]", key), value.clone()))
                .collect();
            query.push(("page[number]".to_string(), page.to_string()));
            query.push(("page[size]".to_string(), PAGE_SIZE.to_string()));

            let doc: Document<Vec<Resource<A>>> =
                self.send(self.request(Method::GET, path).query(&query)).await?;
            items.extend(doc.data.unwrap_or_default());

            let last_page = doc
                .meta
                .and_then(|meta| meta.page)
                .map(|p| p.last_page.max(p.current_page))
                .unwrap_or(page);
            debug!("Fetched {} page {}/{}", path, page, last_page);

            if page >= last_page {
                break;
            }
            page += 1;
        }

        Ok(items)
    }

    /// Lists every product of a store.
    pub async fn list_products(&self, store_id: &str) -> Result<Vec<Product>, LemonError> {
        self.list_all("products", &[("store_id", store_id.to_string())])
            .await
    }

    /// Retrieves a product together with all of its variants.
    pub async fn get_product(&self, product_id: &str) -> Result<ProductWithVariants, LemonError> {
        let req = self
            .request(Method::GET, &format!("products/{}", product_id))
            .query(&[("include", "variants")]);
        let doc: Document<Product> = self.send(req).await?;

        let product = doc
            .data
            .ok_or_else(|| LemonError::NoData(format!("product {}", product_id)))?;

        let variants = doc
            .included
            .into_iter()
            .filter(|res| res.get("type").and_then(Value::as_str) == Some("variants"))
            .map(serde_json::from_value::<Variant>)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProductWithVariants { product, variants })
    }

    /// Lists variants, optionally narrowed to a single product.
    pub async fn list_variants(&self, product_id: Option<&str>) -> Result<Vec<Variant>, LemonError> {
        let filters: Vec<(&str, String)> = product_id
            .map(|id| vec![("product_id", id.to_string())])
            .unwrap_or_default();
        self.list_all("variants", &filters).await
    }

    pub async fn create_checkout(&self, checkout: &NewCheckout) -> Result<Checkout, LemonError> {
        let mut checkout_data = json!({ "custom": checkout.custom });
        if let Some(email) = &checkout.email {
            checkout_data["email"] = json!(email);
        }

        let mut attributes = json!({
            "checkout_options": { "embed": checkout.embed },
            "checkout_data": checkout_data,
        });
        if let Some(redirect_url) = &checkout.redirect_url {
            attributes["product_options"] = json!({ "redirect_url": redirect_url });
        }

        let body = json!({
            "data": {
                "type": "checkouts",
                "attributes": attributes,
                "relationships": {
                    "store": { "data": { "type": "stores", "id": checkout.store_id } },
                    "variant": { "data": { "type": "variants", "id": checkout.variant_id } },
                }
            }
        });

        let doc: Document<Checkout> = self
            .send(self.request(Method::POST, "checkouts").json(&body))
            .await?;
        doc.data
            .ok_or_else(|| LemonError::NoData(format!("checkout for variant {}", checkout.variant_id)))
    }

    /// Lists webhooks registered on a store.
    pub async fn list_webhooks(&self, store_id: &str) -> Result<Vec<Webhook>, LemonError> {
        self.list_all("webhooks", &[("store_id", store_id.to_string())])
            .await
    }

    pub async fn create_webhook(&self, webhook: &NewWebhook) -> Result<Webhook, LemonError> {
        let body = json!({
            "data": {
                "type": "webhooks",
                "attributes": {
                    "url": webhook.url,
                    "events": webhook.events,
                    "secret": webhook.secret,
                },
                "relationships": {
                    "store": { "data": { "type": "stores", "id": webhook.store_id } },
                }
            }
        });

        let doc: Document<Webhook> = self
            .send(self.request(Method::POST, "webhooks").json(&body))
            .await?;
        doc.data
            .ok_or_else(|| LemonError::NoData(format!("webhook for store {}", webhook.store_id)))
    }
}
