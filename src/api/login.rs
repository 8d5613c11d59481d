use std::sync::Arc;

use axum::{
    Extension,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{config::Config, zoho};

/// Starts the OAuth2 authorization-code flow.
///
/// Answers `302 Found` with the Zoho authorization URL in the `Location`
/// header. The URL is pure string construction from configuration, so this
/// handler has no failure path.
pub async fn login(Extension(config): Extension<Arc<Config>>) -> impl IntoResponse {
    (
        StatusCode::FOUND,
        [(header::LOCATION, zoho::auth::authorize_url(&config))],
    )
}
