use lemon::{LemonClient, LemonError, NewCheckout, NewWebhook};
use mockito::Matcher;
use serde_json::{Map, json};

fn product_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "type": "products",
        "id": id,
        "attributes": {
            "store_id": 42,
            "name": name,
            "slug": name.to_lowercase(),
            "description": "<p>desc</p>",
            "status": "published",
            "price": 999,
            "price_formatted": "$9.99",
            "buy_now_url": format!("https://store.lemonsqueezy.com/checkout/buy/{id}"),
            "test_mode": true
        }
    })
}

fn variant_json(id: &str, product_id: i64, status: &str) -> serde_json::Value {
    json!({
        "type": "variants",
        "id": id,
        "attributes": {
            "product_id": product_id,
            "name": format!("Variant {id}"),
            "price": 1500,
            "is_subscription": true,
            "interval": "month",
            "interval_count": 1,
            "has_free_trial": false,
            "status": status,
            "sort": 1
        }
    })
}

fn page_meta(current: u32, last: u32) -> serde_json::Value {
    json!({ "page": { "currentPage": current, "lastPage": last, "perPage": 100, "total": 0 } })
}

#[tokio::test]
async fn list_products_follows_pagination() {
    let mut server = mockito::Server::new_async().await;

    let first = server
        .mock("GET", "/v1/products")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("filter[store_id]".into(), "42".into()),
            Matcher::UrlEncoded("page[number]".into(), "1".into()),
        ]))
        .match_header("authorization", "Bearer test_key")
        .match_header("accept", "application/vnd.api+json")
        .with_status(200)
        .with_body(json!({ "data": [product_json("1", "Basic")], "meta": page_meta(1, 2) }).to_string())
        .create_async()
        .await;

    let second = server
        .mock("GET", "/v1/products")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("filter[store_id]".into(), "42".into()),
            Matcher::UrlEncoded("page[number]".into(), "2".into()),
        ]))
        .with_status(200)
        .with_body(json!({ "data": [product_json("2", "Pro")], "meta": page_meta(2, 2) }).to_string())
        .create_async()
        .await;

    let client = LemonClient::with_base_url("test_key", &server.url());
    let products = client.list_products("42").await.unwrap();

    first.assert_async().await;
    second.assert_async().await;
    let names: Vec<_> = products.iter().map(|p| p.attributes.name.as_str()).collect();
    assert_eq!(names, vec!["Basic", "Pro"]);
}

#[tokio::test]
async fn get_product_collects_included_variants() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/v1/products/7")
        .match_query(Matcher::UrlEncoded("include".into(), "variants".into()))
        .with_status(200)
        .with_body(
            json!({
                "data": product_json("7", "Basic"),
                "included": [
                    variant_json("70", 7, "pending"),
                    variant_json("71", 7, "published"),
                    { "type": "stores", "id": "42", "attributes": {} }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = LemonClient::with_base_url("test_key", &server.url());
    let found = client.get_product("7").await.unwrap();

    mock.assert_async().await;
    assert_eq!(found.product.id, "7");
    assert_eq!(found.variants.len(), 2);
    assert!(found.variants[0].is_default());
    assert!(!found.variants[1].is_default());
}

#[tokio::test]
async fn get_product_without_data_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/products/9")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"data": null}"#)
        .create_async()
        .await;

    let client = LemonClient::with_base_url("test_key", &server.url());
    let err = client.get_product("9").await.unwrap_err();
    assert!(matches!(err, LemonError::NoData(_)));
}

#[tokio::test]
async fn api_errors_carry_status_and_detail() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v1/products/404")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"errors":[{"status":"404","title":"Not Found","detail":"Product not found."}]}"#)
        .create_async()
        .await;

    let client = LemonClient::with_base_url("test_key", &server.url());
    let err = client.get_product("404").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("Product not found."));
}

#[tokio::test]
async fn create_checkout_sends_store_variant_and_custom_data() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/v1/checkouts")
        .match_header("content-type", "application/vnd.api+json")
        .match_body(Matcher::PartialJson(json!({
            "data": {
                "type": "checkouts",
                "attributes": {
                    "checkout_options": { "embed": true },
                    "checkout_data": { "custom": { "user_id": "u-1" }, "email": "a@b.c" }
                },
                "relationships": {
                    "store": { "data": { "type": "stores", "id": "42" } },
                    "variant": { "data": { "type": "variants", "id": "71" } }
                }
            }
        })))
        .with_status(201)
        .with_body(
            json!({
                "data": {
                    "type": "checkouts",
                    "id": "c-1",
                    "attributes": {
                        "store_id": 42,
                        "variant_id": 71,
                        "url": "https://store.lemonsqueezy.com/checkout/custom/c-1",
                        "expires_at": null,
                        "test_mode": true
                    }
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut custom = Map::new();
    custom.insert("user_id".to_string(), json!("u-1"));

    let client = LemonClient::with_base_url("test_key", &server.url());
    let checkout = client
        .create_checkout(&NewCheckout {
            store_id: "42".to_string(),
            variant_id: "71".to_string(),
            embed: true,
            email: Some("a@b.c".to_string()),
            custom,
            redirect_url: None,
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        checkout.attributes.url,
        "https://store.lemonsqueezy.com/checkout/custom/c-1"
    );
}

#[tokio::test]
async fn create_webhook_posts_url_secret_and_events() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/v1/webhooks")
        .match_body(Matcher::PartialJson(json!({
            "data": {
                "type": "webhooks",
                "attributes": {
                    "url": "https://app.example.com/hooks/lemon",
                    "secret": "whsec",
                    "events": ["order_created"]
                },
                "relationships": { "store": { "data": { "type": "stores", "id": "42" } } }
            }
        })))
        .with_status(201)
        .with_body(
            json!({
                "data": {
                    "type": "webhooks",
                    "id": "5",
                    "attributes": {
                        "store_id": 42,
                        "url": "https://app.example.com/hooks/lemon",
                        "events": ["order_created"],
                        "last_sent_at": null,
                        "test_mode": true
                    }
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = LemonClient::with_base_url("test_key", &server.url());
    let webhook = client
        .create_webhook(&NewWebhook {
            store_id: "42".to_string(),
            url: "https://app.example.com/hooks/lemon".to_string(),
            secret: "whsec".to_string(),
            events: vec!["order_created".to_string()],
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(webhook.id, "5");
}
