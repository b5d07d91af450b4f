use poem::Request;
use poem_openapi::{SecurityScheme, auth::ApiKey};

use crate::config::api_key_config::ApiKeyConfig;

/// Shared-secret authentication for mutating routes
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "X-Api-Key",
    key_in = "header",
    checker = "api_key_checker"
)]
pub struct ApiKeyAuth(());

async fn api_key_checker(req: &Request, api_key: ApiKey) -> Option<()> {
    let Some(config) = req.data::<ApiKeyConfig>() else {
        tracing::error!("API key configuration missing from request data");
        return None;
    };

    if config.matches(&api_key.key) {
        Some(())
    } else {
        tracing::warn!(path = %req.uri().path(), "Rejected request with invalid API key");
        None
    }
}
