use super::{
    api_key_config::ApiKeyConfig, cors_config, database_config::DatabaseSettings, env::flag_or,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

/// Behaviour switches for the wishlist and item use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Enables `DELETE /wishlists`.
    pub testing: bool,
    /// An existing wishlist without items answers 404 instead of `[]`.
    pub empty_item_list_not_found: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            testing: false,
            empty_item_list_not_found: true,
        }
    }
}

impl FeatureFlags {
    /// Environment variables:
    /// - TESTING: enables the collection purge (default: false)
    /// - EMPTY_ITEM_LIST_NOT_FOUND: item-list 404 policy (default: true)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            testing: flag_or("TESTING", defaults.testing),
            empty_item_list_not_found: flag_or(
                "EMPTY_ITEM_LIST_NOT_FOUND",
                defaults.empty_item_list_not_found,
            ),
        }
    }
}

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub api_key: ApiKeyConfig,
    pub features: FeatureFlags,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env(),
            api_key: ApiKeyConfig::from_env(),
            features: FeatureFlags::from_env(),
        }
    }
}
