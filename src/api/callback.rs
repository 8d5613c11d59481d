use std::{collections::HashMap, sync::Arc};

use axum::{Extension, Json, extract::Query};
use serde_json::{Value, json};

use crate::{config::Config, error::ApiError, info, success, warning, zoho};

/// Handles the OAuth callback from Zoho.
///
/// Expects the authorization code in the `code` query parameter. Missing
/// code answers 400 without touching the network. Otherwise the code is
/// exchanged for tokens, which are logged for operator visibility and
/// returned to the caller in the response body; nothing is persisted, so the
/// caller must carry the access token on every subsequent contacts call.
/// A failed exchange answers 500 with a generic message only.
pub async fn callback(
    Extension(config): Extension<Arc<Config>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let Some(code) = params.get("code") else {
        return Err(ApiError::bad_request("no authorization code received"));
    };

    match zoho::auth::exchange_code(&config, code).await {
        Ok(token) => {
            success!("Access token: {}", token.access_token);
            info!("Refresh token: {}", token.refresh_token);
            info!("Expires in {} seconds", token.expires_in);

            Ok(Json(json!({
                "message": "Authenticated with Zoho CRM",
                "access_token": token.access_token,
                "refresh_token": token.refresh_token,
            })))
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Err(ApiError::internal(
                "failed to exchange authorization code for token",
            ))
        }
    }
}
