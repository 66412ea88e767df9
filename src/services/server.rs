use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::middleware::log_requests;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::database::SqliteStore;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let store = SqliteStore::open(&self.config.store.database_path)?;

        let state = Arc::new(AppState {
            store,
            config: self.config.clone(),
        });

        let app = create_router(state)
            .layer(axum::middleware::from_fn(log_requests))
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
