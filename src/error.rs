//! Error types for the Zoho CRM proxy.
//!
//! Two layers: [`ZohoError`] describes what went wrong talking to Zoho
//! (transport failure or a non-2xx upstream response with its payload), and
//! [`ApiError`] is the single mapping from any failure to the HTTP response
//! returned to the caller. Every handler funnels its failures through
//! `ApiError` so the error body shape stays uniform across endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

/// Failure of an outbound call to Zoho.
#[derive(Debug, Error)]
pub enum ZohoError {
    /// The request never completed (connection, TLS, body decoding).
    #[error("request to Zoho failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Zoho answered with a non-2xx status. Carries the raw upstream error
    /// payload when it was valid JSON, else the status line as a string.
    #[error("Zoho responded with {status}")]
    Api {
        status: reqwest::StatusCode,
        detail: Value,
    },
}

impl ZohoError {
    /// Extracts the detail to embed in an error response: the upstream JSON
    /// payload for API errors, the error message for transport failures.
    pub fn detail(self) -> Value {
        match self {
            ZohoError::Api { detail, .. } => detail,
            ZohoError::Transport(e) => Value::String(e.to_string()),
        }
    }
}

/// Error returned to the HTTP caller.
///
/// Serializes as `{"error": <message>}` with an optional `"details"` field
/// carrying the upstream failure payload.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    details: Option<Value>,
}

impl ApiError {
    /// Client input error: 400, no detail.
    pub fn bad_request(message: &str) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
            details: None,
        }
    }

    /// Upstream failure surfaced with a generic message only: 500, no
    /// detail. Used by the callback handler, which never exposes the token
    /// endpoint's response to the caller.
    pub fn internal(message: &str) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_string(),
            details: None,
        }
    }

    /// Upstream failure surfaced with the raw upstream detail embedded: 500
    /// plus `details`.
    pub fn upstream(message: &str, err: ZohoError) -> Self {
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_string(),
            details: Some(err.detail()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.message, "details": details }),
            None => json!({ "error": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}
