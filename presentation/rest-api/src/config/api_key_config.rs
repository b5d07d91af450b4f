use std::env;

use subtle::ConstantTimeEq;
use uuid::Uuid;

/// Shared secret expected in the `X-Api-Key` header of mutating routes.
#[derive(Clone)]
pub struct ApiKeyConfig {
    key: String,
}

impl ApiKeyConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Load the key from the environment
    ///
    /// Environment variables:
    /// - API_KEY: shared secret (default: a random UUID, logged as a warning)
    pub fn from_env() -> Self {
        match env::var("API_KEY") {
            Ok(key) if !key.trim().is_empty() => Self::new(key),
            _ => {
                let key = Uuid::new_v4().simple().to_string();
                tracing::warn!(
                    api_key = %key,
                    "API_KEY is not set, generated a temporary key for this run"
                );
                Self::new(key)
            }
        }
    }

    /// Compares `candidate` against the configured key in constant time.
    pub fn matches(&self, candidate: &str) -> bool {
        self.key.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}

impl std::fmt::Debug for ApiKeyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyConfig").finish_non_exhaustive()
    }
}
