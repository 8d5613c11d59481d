use reqwest::{Client, header::AUTHORIZATION};
use serde_json::Value;

use crate::{
    config::Config,
    error::ZohoError,
    types::{ContactEnvelope, NewContact},
};

/// Fields requested when listing contacts.
const CONTACT_FIELDS: &str = "First_Name,Last_Name,id";

/// Authorization scheme Zoho expects on CRM API calls.
const AUTH_SCHEME: &str = "Zoho-oauthtoken";

/// Retrieves the contacts collection from the Zoho CRM API.
///
/// Issues one GET to the contacts endpoint requesting first name, last name
/// and id for each record, authorized with the caller-supplied access token.
/// The response body is returned as raw JSON so the handler can relay it
/// verbatim; this service does not reshape upstream data.
///
/// # Arguments
///
/// * `config` - Service configuration holding the CRM API base URL
/// * `token` - Access token supplied by the HTTP caller, treated as opaque
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Value)` - Zoho's response body, unmodified
/// - `Err(ZohoError)` - Transport failure or a non-2xx answer (typically an
///   invalid or expired token)
pub async fn list(config: &Config, token: &str) -> Result<Value, ZohoError> {
    let api_url = format!(
        "{uri}/crm/v3/Contacts?fields={fields}",
        uri = config.api_url,
        fields = CONTACT_FIELDS,
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .header(AUTHORIZATION, format!("{AUTH_SCHEME} {token}"))
        .send()
        .await?;

    let body = super::error_for_detail(response).await?.json::<Value>().await?;
    Ok(body)
}

/// Creates a contact in the Zoho CRM API.
///
/// Wraps the two name fields in the record envelope Zoho expects
/// (`{"data":[{"First_Name":…,"Last_Name":…}]}`) and issues one POST to the
/// contacts endpoint with the caller-supplied access token.
///
/// # Arguments
///
/// * `config` - Service configuration holding the CRM API base URL
/// * `token` - Access token supplied by the HTTP caller, treated as opaque
/// * `first_name` - Contact first name, already validated as present
/// * `last_name` - Contact last name, already validated as present
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Value)` - Zoho's response body, including the created record(s)
///   under `data`
/// - `Err(ZohoError)` - Transport failure or a non-2xx answer
pub async fn create(
    config: &Config,
    token: &str,
    first_name: &str,
    last_name: &str,
) -> Result<Value, ZohoError> {
    let envelope = ContactEnvelope {
        data: vec![NewContact {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }],
    };

    let client = Client::new();
    let response = client
        .post(format!("{}/crm/v3/Contacts", config.api_url))
        .header(AUTHORIZATION, format!("{AUTH_SCHEME} {token}"))
        .json(&envelope)
        .send()
        .await?;

    let body = super::error_for_detail(response).await?.json::<Value>().await?;
    Ok(body)
}
