use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::RetryPolicy;

/// Deployment of the QuillSign API a client talks to.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApiEnvironment {
    #[default]
    Production,
    Staging,
    Development,
}

impl ApiEnvironment {
    pub fn base_url(&self) -> Url {
        let raw = match self {
            ApiEnvironment::Production => "https://api.quillsign.com",
            ApiEnvironment::Staging => "https://api.staging.quillsign.com",
            ApiEnvironment::Development => "http://localhost:8080",
        };
        Url::parse(raw).unwrap()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Setters, PartialEq)]
#[setters(into)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// API secret key; must carry the `sk_` prefix
    pub secret_key: String,

    /// Base address all endpoint paths are joined against
    pub base_url: Url,

    /// Default per-attempt timeout in milliseconds
    pub timeout_ms: u64,

    /// Headers attached to every request; per-call headers win on conflict
    pub default_headers: Vec<(String, String)>,

    pub retry: RetryPolicy,
}

impl ClientConfig {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self::for_environment(secret_key, ApiEnvironment::Production)
    }

    pub fn for_environment(secret_key: impl Into<String>, environment: ApiEnvironment) -> Self {
        Self {
            secret_key: secret_key.into(),
            base_url: environment.base_url(),
            timeout_ms: 30_000,
            default_headers: Vec::new(),
            retry: RetryPolicy::default(),
        }
    }
}

/// Per-call overrides applied on top of the client configuration.
#[derive(Debug, Clone, Default, Setters, PartialEq)]
#[setters(into, strip_option)]
pub struct RequestOptions {
    /// Overrides the configured per-attempt timeout for this call
    pub timeout_ms: Option<u64>,

    /// Additional headers for this call; win over defaults on conflict
    #[setters(skip)]
    pub headers: Vec<(String, String)>,

    /// Disables retry entirely; the call gets exactly one attempt
    pub no_retry: bool,
}

impl RequestOptions {
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}
