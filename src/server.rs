use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tower_http::cors::CorsLayer;

use crate::{api, config::Config, error};

/// Builds the service router with all routes, CORS and the injected
/// configuration. Split out from [`start_api_server`] so tests can drive the
/// router directly without binding a socket.
pub fn app(config: Arc<Config>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/contacts", get(api::list_contacts))
        .route("/contact/create", post(api::create_contact))
        .layer(CorsLayer::permissive())
        .layer(Extension(config))
}

pub async fn start_api_server(config: Arc<Config>) {
    let addr = match SocketAddr::from_str(&config.server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let app = app(config);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
