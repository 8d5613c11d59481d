//! # Zoho Integration Module
//!
//! This module is the outbound half of the proxy: every HTTPS call the
//! service makes to Zoho lives here, behind a small function-per-operation
//! interface. Handlers call in with values from the request plus the
//! injected [`Config`](crate::config::Config) and get back either the parsed
//! upstream payload or a [`ZohoError`] describing what went wrong.
//!
//! ## Modules
//!
//! - [`auth`] - Authorization URL construction and the code-for-token
//!   exchange against the Zoho accounts server
//! - [`contacts`] - Contact listing and creation against the Zoho CRM API
//!
//! ## Error Handling
//!
//! Every operation makes exactly one upstream request. There are no retries
//! and no timeouts beyond reqwest's defaults; a transport failure or a
//! non-2xx response is returned as a [`ZohoError`] and mapped to an HTTP
//! error by the calling handler. Non-2xx responses keep the upstream's JSON
//! body so the caller can see Zoho's own diagnostics.
//!
//! ## Authentication
//!
//! The contacts operations do not manage credentials: the access token is
//! supplied by the HTTP caller on every request and forwarded verbatim in
//! Zoho's `Zoho-oauthtoken` authorization scheme.

pub mod auth;
pub mod contacts;

use reqwest::Response;
use serde_json::Value;

use crate::error::ZohoError;

/// Turns a non-2xx upstream response into a [`ZohoError::Api`] carrying the
/// upstream's JSON payload, passing 2xx responses through untouched.
pub(crate) async fn error_for_detail(response: Response) -> Result<Response, ZohoError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // Keep Zoho's own error body when it parses; fall back to the status line.
    let detail = response
        .json::<Value>()
        .await
        .unwrap_or_else(|_| Value::String(status.to_string()));

    Err(ZohoError::Api { status, detail })
}
