use crate::{config::ServerConfig, services::rest::endpoints::greeting};
use anyhow::Context;
use axum::{serve::Serve, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

pub struct RestServer {
    serve: Serve<Router, Router>,
    local_port: u16,
}

impl RestServer {
    pub async fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        let router = Self::build_router();

        let address = format!("{}:{}", config.host, config.port);
        let listener = tokio::net::TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {}", address))?;

        let local_port = listener
            .local_addr()
            .context("Cannot get local port")?
            .port();

        Ok(RestServer {
            serve: axum::serve(listener, router),
            local_port,
        })
    }

    pub fn local_port(&self) -> u16 {
        self.local_port
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        info!("Server running on port {}", self.local_port());

        self.serve.await.context("HTTP Server error")?;

        Ok(())
    }

    fn build_router() -> Router {
        Router::new()
            .merge(greeting::get_routes())
            .layer(TraceLayer::new_for_http())
    }
}
