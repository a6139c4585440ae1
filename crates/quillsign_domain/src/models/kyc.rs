use chrono::{DateTime, Utc};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Setters)]
#[setters(into, strip_option)]
#[serde(rename_all = "camelCase")]
pub struct ShareKyc {
    pub recipient_email: String,
    /// Attribute names the recipient is allowed to read
    pub scope: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in_secs: Option<u64>,
}

impl ShareKyc {
    pub fn new(recipient_email: impl Into<String>, scope: Vec<String>) -> Self {
        Self {
            recipient_email: recipient_email.into(),
            scope,
            expires_in_secs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycShare {
    pub id: String,
    pub status: KycShareStatus,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KycShareStatus {
    Pending,
    Accepted,
    Revoked,
}
