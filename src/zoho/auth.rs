use reqwest::Client;

use crate::{config::Config, error::ZohoError, types::Token};

/// OAuth scope requested from Zoho: full access to the contacts module.
const AUTH_SCOPE: &str = "ZohoCRM.modules.contacts.ALL";

/// Builds the Zoho authorization URL the login endpoint redirects to.
///
/// Encodes the contacts-management scope, the configured client id and
/// redirect URI, `response_type=code` and `access_type=offline` (so Zoho
/// issues a refresh token alongside the access token). Pure string
/// construction; this cannot fail.
///
/// # Example
///
/// ```
/// let url = authorize_url(&config);
/// // https://accounts.zoho.com/oauth/v2/auth?scope=ZohoCRM.modules.contacts.ALL&client_id=...
/// ```
pub fn authorize_url(config: &Config) -> String {
    format!(
        "{accounts_url}/oauth/v2/auth?scope={scope}&client_id={client_id}&response_type=code&access_type=offline&redirect_uri={redirect_uri}",
        accounts_url = config.accounts_url,
        scope = AUTH_SCOPE,
        client_id = config.client_id,
        redirect_uri = config.redirect_uri,
    )
}

/// Exchanges an authorization code for an access/refresh token pair.
///
/// Completes the OAuth2 authorization-code flow by POSTing the code to the
/// Zoho accounts token endpoint together with the client credentials and the
/// redirect URI the code was issued for. This is a confidential-client
/// exchange; the client secret authenticates the service.
///
/// # Arguments
///
/// * `config` - Service configuration holding client credentials and the
///   accounts server base URL
/// * `code` - Authorization code received on the OAuth callback
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Access token, refresh token and expiry in seconds
/// - `Err(ZohoError)` - Transport failure or a non-2xx answer from the
///   token endpoint (invalid or expired code, mismatched redirect URI)
///
/// # Security Note
///
/// The authorization code is single-use and short-lived; the exchange
/// happens immediately inside the callback request that delivered the code.
pub async fn exchange_code(config: &Config, code: &str) -> Result<Token, ZohoError> {
    let client = Client::new();
    let response = client
        .post(format!("{}/oauth/v2/token", config.accounts_url))
        .query(&[
            ("grant_type", "authorization_code"),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("code", code),
        ])
        .send()
        .await?;

    let token = super::error_for_detail(response).await?.json::<Token>().await?;
    Ok(token)
}
