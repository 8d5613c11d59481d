use serde::{Deserialize, Serialize};

/// Token pair returned by the Zoho accounts server after a successful
/// authorization-code exchange. Held only for the duration of the callback
/// request; this service never persists or refreshes tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
}

/// Inbound body of `POST /contact/create`. Both fields are required but
/// modeled as options so missing fields reach the handler's presence check
/// instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Envelope the Zoho CRM API expects around newly created records.
#[derive(Debug, Clone, Serialize)]
pub struct ContactEnvelope {
    pub data: Vec<NewContact>,
}

/// A contact record in the shape the Zoho CRM API expects on creation.
#[derive(Debug, Clone, Serialize)]
pub struct NewContact {
    #[serde(rename = "First_Name")]
    pub first_name: String,
    #[serde(rename = "Last_Name")]
    pub last_name: String,
}
