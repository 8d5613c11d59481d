//! # API Module
//!
//! This module provides the HTTP endpoints exposed by the proxy server.
//! Every handler is a stateless pass-through: it validates trivial
//! preconditions, makes at most one outbound call through the
//! [`crate::zoho`] client, and maps the result or error to an HTTP response.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - Redirects the caller to Zoho's authorization page to start
//!   the OAuth2 authorization-code flow
//! - [`callback`] - Receives the authorization code from Zoho and exchanges
//!   it for an access/refresh token pair, which is returned to the caller
//!   rather than stored
//!
//! ### Contacts
//!
//! - [`list_contacts`] - Relays the Zoho CRM contacts collection verbatim
//! - [`create_contact`] - Creates a contact in Zoho CRM from a minimal
//!   `{first_name, last_name}` body
//!
//! ### Monitoring
//!
//! - [`health`] - Health check endpoint returning status and version
//!
//! ## Architecture
//!
//! Handlers are async functions wired into an [Axum](https://docs.rs/axum)
//! router by [`crate::server`]. Shared configuration is injected through an
//! `Extension` layer; there is no other shared state, so concurrent requests
//! never coordinate.
//!
//! ## Error Responses
//!
//! All failure paths go through [`crate::error::ApiError`], which keeps the
//! error body shape uniform: client input errors answer 400, upstream
//! failures answer 500 with Zoho's own error payload embedded as `details`
//! where the endpoint exposes it.

mod callback;
mod contacts;
mod health;
mod login;

pub use callback::callback;
pub use contacts::{create_contact, list_contacts};
pub use health::health;
pub use login::login;
