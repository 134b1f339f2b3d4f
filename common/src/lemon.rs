use ::lemon::LemonClient;

use crate::env_config::LemonSettings;

pub fn create_client(settings: &LemonSettings) -> LemonClient {
    LemonClient::with_base_url(&settings.api_key, &settings.api_url)
}
