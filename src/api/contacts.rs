use std::sync::Arc;

use axum::{Extension, Json, http::HeaderMap};
use serde_json::{Value, json};

use crate::{
    config::Config,
    error::ApiError,
    types::CreateContactRequest,
    warning, zoho,
};

/// Header the caller uses to supply its Zoho access token.
const TOKEN_HEADER: &str = "zoho-oauthtoken";

/// Pulls the caller's access token out of the request headers.
///
/// The token is opaque to this service and not validated; an absent or
/// non-UTF-8 header value becomes the empty string, which Zoho rejects on
/// the upstream call.
fn oauth_token(headers: &HeaderMap) -> &str {
    headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Lists contacts from Zoho CRM.
///
/// Forwards the caller's token and relays Zoho's response body verbatim.
/// Upstream failure answers 500 with Zoho's error payload embedded as
/// `details`.
pub async fn list_contacts(
    Extension(config): Extension<Arc<Config>>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    match zoho::contacts::list(&config, oauth_token(&headers)).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            warning!("Failed to fetch contacts: {}", e);
            Err(ApiError::upstream("failed to fetch contacts", e))
        }
    }
}

/// Creates a contact in Zoho CRM.
///
/// Requires `first_name` and `last_name` in the JSON body; if either is
/// missing or blank the handler answers 400 without an upstream call.
/// On success the created record(s), as returned by Zoho under `data`, are
/// relayed alongside a confirmation message.
pub async fn create_contact(
    Extension(config): Extension<Arc<Config>>,
    headers: HeaderMap,
    Json(request): Json<CreateContactRequest>,
) -> Result<Json<Value>, ApiError> {
    let (Some(first_name), Some(last_name)) = (
        non_empty(request.first_name),
        non_empty(request.last_name),
    ) else {
        return Err(ApiError::bad_request("first_name and last_name are required"));
    };

    match zoho::contacts::create(&config, oauth_token(&headers), &first_name, &last_name).await {
        Ok(body) => Ok(Json(json!({
            "message": "Contact created in Zoho CRM",
            "data": body.get("data").cloned().unwrap_or(Value::Null),
        }))),
        Err(e) => {
            warning!("Failed to create contact: {}", e);
            Err(ApiError::upstream("failed to create contact", e))
        }
    }
}
