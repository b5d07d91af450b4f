use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::api::index::routes::SERVICE_NAME;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Routes, docs and the API key, without the network-facing middleware.
    pub fn build_app(container: DependencyContainer, server_url: String) -> impl Endpoint {
        let api_service = OpenApiService::new(
            (
                container.index_api,
                container.health_api,
                container.wishlist_api,
                container.item_api,
            ),
            SERVICE_NAME,
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .nest("/", api_service)
            .data(container.api_key)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::build_app(container, format!("http://{addr}"))
            .with(config.cors)
            .with(Tracing);

        tracing::info!(address = %addr, testing = config.features.testing, "Server running");
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(addr)).run(app).await?;
        Ok(())
    }
}
