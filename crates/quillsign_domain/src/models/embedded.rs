use chrono::{DateTime, Utc};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Setters)]
#[setters(into, strip_option)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmbeddedSession {
    pub signature_request_id: String,
    /// Restricts the session to one signer of the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

impl CreateEmbeddedSession {
    pub fn new(signature_request_id: impl Into<String>) -> Self {
        Self {
            signature_request_id: signature_request_id.into(),
            signer_email: None,
            redirect_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedSession {
    pub id: String,
    /// URL to embed in an iframe for in-app signing
    pub url: String,
    pub expires_at: DateTime<Utc>,
}
