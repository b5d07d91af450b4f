use std::collections::HashMap;

use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;

pub const SERVICE_NAME: &str = "Wishlists REST API Service";

/// Service description returned by the root route
#[derive(Debug, Clone, Object)]
pub struct IndexResponse {
    pub name: String,
    pub version: String,
    pub url: String,
    /// Reserved for resource links, currently empty
    pub resources: HashMap<String, String>,
}

pub struct IndexApi;

#[OpenApi]
impl IndexApi {
    /// Service information
    #[oai(path = "/", method = "get", tag = "ApiTags::Index")]
    async fn index(&self) -> Json<IndexResponse> {
        Json(IndexResponse {
            name: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            url: "/".to_string(),
            resources: HashMap::new(),
        })
    }
}
