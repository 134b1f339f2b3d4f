use std::{env, sync::Arc};

use crate::error::{AppError, Res};

#[derive(Clone, Debug)]
/// Configuration struct for the server.
///
/// This struct holds all the necessary configuration parameters
/// required to initialize and run the server.
/// It includes database connection details, the JWT secret,
/// server host and port, number of worker threads, CORS settings,
/// logging preferences and the Lemon Squeezy settings.
pub struct Config {
    // environment
    pub environment: String, // development or production
    /// The URL of the database to connect to.
    pub database_url: String,
    /// Secret used to verify bearer tokens issued by the identity service.
    pub jwt_secret: String,
    /// The hostname or IP address the server will bind to.
    pub server_host: String,
    /// The port number the server will listen on.
    pub server_port: u16,
    /// The number of worker threads to spawn for handling requests.
    pub num_workers: usize,
    /// The allowed origin for CORS (Cross-Origin Resource Sharing).
    pub cors_allowed_origin: String,
    /// A boolean indicating whether console logging is enabled.
    pub console_logging_enabled: bool,
    /// Lemon Squeezy settings. Validated lazily, see [`Config::lemon_settings`].
    pub lemon: LemonConfig,
}

#[derive(Clone, Debug, Default)]
/// Raw Lemon Squeezy settings as read from the environment.
pub struct LemonConfig {
    pub api_key: Option<String>,
    pub store_id: Option<String>,
    pub webhook_url: Option<String>,
    pub webhook_secret: Option<String>,
    pub checkout_redirect_url: Option<String>,
    /// Base URL of the API, overridable for tests and proxies.
    pub api_url: String,
}

#[derive(Clone, Debug)]
/// Validated settings required for any call to the Lemon Squeezy API.
pub struct LemonSettings {
    pub api_key: String,
    pub store_id: String,
    pub api_url: String,
}

#[derive(Clone, Debug)]
pub struct WebhookSettings {
    pub url: String,
    pub secret: Option<String>,
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// # Environment Variables
    ///
    /// Required:
    /// - `ENVIRONMENT`: `development` or `production`
    /// - `DATABASE_URL`: Connection string for the database
    /// - `JWT_SECRET`: Secret key for bearer token verification
    ///
    /// Optional (with defaults):
    /// - `IP`: Server host (default: "127.0.0.1")
    /// - `PORT`: Server port (default: 8080)
    /// - `WORKERS`: Number of worker threads (default: 4)
    /// - `CORS_ALLOWED_ORIGIN`: Allowed CORS origin (default: "http://localhost:3000")
    /// - `ENABLE_CONSOLE_LOGGING`: Whether to enable console logging (default: true)
    /// - `LEMONSQUEEZY_API_URL`: API base URL (default: "https://api.lemonsqueezy.com")
    ///
    /// Optional at boot, required by the procedures that use them:
    /// - `LEMONSQUEEZY_API_KEY`, `LEMONSQUEEZY_STORE_ID`
    /// - `LEMONSQUEEZY_WEBHOOK_URL`, `LEMONSQUEEZY_WEBHOOK_SECRET`
    /// - `LEMONSQUEEZY_CHECKOUT_REDIRECT_URL`
    ///
    /// # Panics
    ///
    /// This function will panic if required environment variables are missing.
    pub fn from_env() -> Arc<Self> {
        dotenvy::dotenv().ok();

        Arc::new(Config::from_lookup(|key| env::var(key).ok()))
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Config {
            environment: var("ENVIRONMENT").expect("ENVIRONMENT must be set"),
            database_url: var("DATABASE_URL").expect("DATABASE_URL must be set"),
            jwt_secret: var("JWT_SECRET").expect("JWT_SECRET must be set"),
            server_host: var("IP").unwrap_or_else(|| "127.0.0.1".to_string()),
            server_port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            num_workers: var("WORKERS").and_then(|w| w.parse().ok()).unwrap_or(4),
            cors_allowed_origin: var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            console_logging_enabled: var("ENABLE_CONSOLE_LOGGING")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(true),
            lemon: LemonConfig {
                api_key: var("LEMONSQUEEZY_API_KEY"),
                store_id: var("LEMONSQUEEZY_STORE_ID"),
                webhook_url: var("LEMONSQUEEZY_WEBHOOK_URL"),
                webhook_secret: var("LEMONSQUEEZY_WEBHOOK_SECRET"),
                checkout_redirect_url: var("LEMONSQUEEZY_CHECKOUT_REDIRECT_URL"),
                api_url: var("LEMONSQUEEZY_API_URL")
                    .unwrap_or_else(|| ::lemon::DEFAULT_API_URL.to_string()),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Returns the API key and store id, or a configuration error naming the
    /// first missing variable.
    pub fn lemon_settings(&self) -> Res<LemonSettings> {
        Ok(LemonSettings {
            api_key: required(&self.lemon.api_key, "LEMONSQUEEZY_API_KEY")?,
            store_id: required(&self.lemon.store_id, "LEMONSQUEEZY_STORE_ID")?,
            api_url: self.lemon.api_url.clone(),
        })
    }

    /// Webhook URL (always required) and secret (only required when creating).
    pub fn webhook_settings(&self) -> Res<WebhookSettings> {
        Ok(WebhookSettings {
            url: required(&self.lemon.webhook_url, "LEMONSQUEEZY_WEBHOOK_URL")?,
            secret: self.lemon.webhook_secret.clone(),
        })
    }
}

impl WebhookSettings {
    pub fn require_secret(&self) -> Res<&str> {
        self.secret
            .as_deref()
            .ok_or_else(|| AppError::Config("LEMONSQUEEZY_WEBHOOK_SECRET is not set".to_string()))
    }
}

fn required(value: &Option<String>, name: &str) -> Res<String> {
    value
        .clone()
        .ok_or_else(|| AppError::Config(format!("{} is not set", name)))
}
