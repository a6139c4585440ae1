use std::sync::Arc;
use std::time::Duration;

use quillsign_domain::{Account, ClientConfig, Error, Health, RequestOptions, Result};
use reqwest::Method;

use crate::backoff::{Jitter, ThreadRngJitter};
use crate::executor::Executor;
use crate::resources::{Documents, Embedded, Kyc, Media, Signatures};

/// Typed client for the QuillSign API.
///
/// Construct once and reuse; it holds only immutable configuration and a
/// pooled HTTP client, so clones are cheap and concurrent calls need no
/// synchronization.
#[derive(Clone)]
pub struct Client {
    executor: Arc<Executor>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_jitter(config, Arc::new(ThreadRngJitter))
    }

    /// Like [`Client::new`] with an explicit jitter source, so callers with
    /// their own randomness requirements (or tests) can pin the backoff.
    pub fn with_jitter(config: ClientConfig, jitter: Arc<dyn Jitter>) -> Result<Self> {
        if config.secret_key.is_empty() {
            return Err(Error::configuration("missing secret key"));
        }
        if !config.secret_key.starts_with("sk_") {
            return Err(Error::configuration("secret key must start with sk_"));
        }

        let client = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(|error| {
                Error::configuration(format!("failed to build http client: {error}"))
            })?;

        Ok(Self {
            executor: Arc::new(Executor::new(client, config, jitter)),
        })
    }

    pub fn documents(&self) -> Documents {
        Documents::new(self.executor.clone())
    }

    pub fn signatures(&self) -> Signatures {
        Signatures::new(self.executor.clone())
    }

    pub fn embedded(&self) -> Embedded {
        Embedded::new(self.executor.clone())
    }

    pub fn media(&self) -> Media {
        Media::new(self.executor.clone())
    }

    pub fn kyc(&self) -> Kyc {
        Kyc::new(self.executor.clone())
    }

    /// Account behind the secret key.
    pub async fn me(&self) -> Result<Option<Account>> {
        self.executor
            .execute_json(Method::GET, "/api/v1/me", None::<&()>, &RequestOptions::default())
            .await
    }

    pub async fn health(&self) -> Result<Option<Health>> {
        self.executor
            .execute_json(
                Method::GET,
                "/api/v1/health",
                None::<&()>,
                &RequestOptions::default(),
            )
            .await
    }
}
