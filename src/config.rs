//! Configuration management for the Zoho CRM proxy.
//!
//! This module loads configuration from environment variables and an optional
//! `.env` file in the working directory. All values are read once at process
//! start into an immutable [`Config`] that is injected into the request
//! handlers; nothing reads the environment at request time.

use std::env;

/// Immutable service configuration, fixed at startup.
///
/// Holds the OAuth client credentials, the redirect URI registered with
/// Zoho, the listening port, and the Zoho endpoint base URLs. The base URLs
/// default to the production Zoho hosts and are overridable through the
/// environment, which is also what lets tests point the service at a stub
/// upstream.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on.
    pub port: u16,
    /// OAuth client id issued by the Zoho developer console.
    pub client_id: String,
    /// OAuth client secret issued by the Zoho developer console.
    pub client_secret: String,
    /// Redirect URI registered for the OAuth application.
    pub redirect_uri: String,
    /// Base URL of the Zoho accounts server (authorization and token
    /// endpoints).
    pub accounts_url: String,
    /// Base URL of the Zoho CRM API server.
    pub api_url: String,
}

/// Default port when `PORT` is not set.
const DEFAULT_PORT: u16 = 3000;

/// Default redirect URI when `REDIRECT_URI` is not set.
const DEFAULT_REDIRECT_URI: &str = "http://localhost:3000/callback";

/// Production Zoho accounts server.
const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.zoho.com";

/// Production Zoho CRM API server.
const DEFAULT_API_URL: &str = "https://www.zohoapis.com";

/// Loads environment variables from a `.env` file in the working directory.
///
/// A missing `.env` file is not an error; in that case only the process
/// environment is used.
pub fn load_env() {
    let _ = dotenv::dotenv();
}

impl Config {
    /// Builds a [`Config`] from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `PORT` - listening port (default 3000)
    /// - `CLIENT_ID` - OAuth client id (required)
    /// - `CLIENT_SECRECT` - OAuth client secret (required; the variable name
    ///   is misspelled on purpose, existing deployments already use it)
    /// - `REDIRECT_URI` - OAuth redirect URI
    ///   (default `http://localhost:3000/callback`)
    /// - `ZOHO_ACCOUNTS_URL` - accounts server base URL
    ///   (default `https://accounts.zoho.com`)
    /// - `ZOHO_API_URL` - CRM API base URL
    ///   (default `https://www.zohoapis.com`)
    ///
    /// # Errors
    ///
    /// Returns an error message naming the offending variable if a required
    /// variable is absent or `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, String> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| format!("PORT must be a valid port number, got '{}'", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let client_id = env::var("CLIENT_ID").map_err(|_| "CLIENT_ID must be set".to_string())?;
        let client_secret =
            env::var("CLIENT_SECRECT").map_err(|_| "CLIENT_SECRECT must be set".to_string())?;

        let redirect_uri =
            env::var("REDIRECT_URI").unwrap_or_else(|_| DEFAULT_REDIRECT_URI.to_string());
        let accounts_url =
            env::var("ZOHO_ACCOUNTS_URL").unwrap_or_else(|_| DEFAULT_ACCOUNTS_URL.to_string());
        let api_url = env::var("ZOHO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Config {
            port,
            client_id,
            client_secret,
            redirect_uri,
            accounts_url,
            api_url,
        })
    }

    /// Returns the socket address the server should bind to.
    ///
    /// # Example
    ///
    /// ```
    /// let addr = config.server_addr(); // e.g., "0.0.0.0:3000"
    /// ```
    pub fn server_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
