//! Minimal Lemon Squeezy API client.
//!
//! Covers the handful of JSON:API resources the billing service mirrors or
//! creates: products, variants, checkouts and webhooks.

pub mod client;
pub mod error;
pub mod models;

pub use client::{DEFAULT_API_URL, LemonClient};
pub use error::LemonError;
pub use models::{
    Checkout, NewCheckout, NewWebhook, Product, ProductWithVariants, Resource, Variant, Webhook,
};

/// Events a freshly registered webhook subscribes to.
pub const WEBHOOK_EVENTS: &[&str] = &[
    "order_created",
    "order_refunded",
    "subscription_created",
    "subscription_updated",
    "subscription_cancelled",
    "subscription_resumed",
    "subscription_expired",
    "subscription_paused",
    "subscription_unpaused",
    "subscription_payment_success",
    "subscription_payment_failed",
];

/// Status the provider gives the implicit default variant of a product that
/// also has explicit variants.
pub const DEFAULT_VARIANT_STATUS: &str = "pending";
