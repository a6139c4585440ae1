use std::sync::Arc;
use std::time::Duration;

use quillsign_domain::{ClientConfig, Error, FileAttachment, RequestOptions, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::backoff::{Jitter, delay_for_attempt};

/// Resilient request core: turns one logical call into a bounded sequence of
/// timeout-guarded attempts, classifying every outcome as success, retryable
/// failure or terminal failure.
///
/// Holds no per-call mutable state; one instance is shared by all resource
/// bindings and is safe to use from concurrent tasks.
pub(crate) struct Executor {
    client: reqwest::Client,
    config: ClientConfig,
    jitter: Arc<dyn Jitter>,
}

impl Executor {
    pub(crate) fn new(
        client: reqwest::Client,
        config: ClientConfig,
        jitter: Arc<dyn Jitter>,
    ) -> Self {
        Self { client, config, jitter }
    }

    /// Executes a JSON-bodied request and decodes the response.
    ///
    /// `Ok(None)` covers every "no payload" outcome: 204, `content-length:
    /// 0`, a non-JSON content type, or a 2xx body that fails to decode.
    pub(crate) async fn execute_json<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let headers = self.json_headers(options)?;
        let payload = body.map(serde_json::to_vec).transpose().map_err(|error| {
            Error::transport(format!("failed to encode request body: {error}"), false)
        })?;
        let timeout = Duration::from_millis(options.timeout_ms.unwrap_or(self.config.timeout_ms));
        let attempts = if options.no_retry {
            1
        } else {
            self.config.retry.total_attempts()
        };

        self.run(attempts, |attempt| {
            let url = url.clone();
            let method = method.clone();
            let headers = headers.clone();
            let payload = payload.clone();
            async move {
                debug!(%url, %method, attempt, "Dispatching request");
                let mut request = self.client.request(method, url).headers(headers);
                if let Some(bytes) = payload {
                    request = request.body(bytes);
                }

                let exchange = async {
                    let response = request.send().await.map_err(classify_transport)?;
                    decode(response).await
                };
                match tokio::time::timeout(timeout, exchange).await {
                    Ok(outcome) => outcome,
                    Err(_) => Err(Error::transport("request timeout", true)),
                }
            }
        })
        .await
    }

    /// Executes a multipart file upload.
    ///
    /// Always POST, always the full retry budget, and a per-attempt deadline
    /// of twice the configured timeout since uploads move more bytes.
    pub(crate) async fn execute_upload<T>(
        &self,
        path: &str,
        field: &str,
        files: &[FileAttachment],
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        let headers = self.upload_headers()?;
        let timeout = Duration::from_millis(self.config.timeout_ms.saturating_mul(2));
        let attempts = self.config.retry.total_attempts();

        self.run(attempts, |attempt| {
            let url = url.clone();
            let headers = headers.clone();
            async move {
                debug!(%url, attempt, files = files.len(), "Dispatching upload");
                // A consumed form cannot be replayed; encode a fresh one per try
                let form = build_form(field, files)?;
                let request = self.client.post(url).headers(headers).multipart(form);

                let exchange = async {
                    let response = request.send().await.map_err(classify_transport)?;
                    decode(response).await
                };
                match tokio::time::timeout(timeout, exchange).await {
                    Ok(outcome) => outcome,
                    Err(_) => Err(Error::transport("upload timeout", true)),
                }
            }
        })
        .await
    }

    /// Runs attempts strictly sequentially until one succeeds, a terminal
    /// failure occurs, or the budget is spent. The last error seen is the one
    /// surfaced.
    async fn run<T, F, Fut>(&self, attempts: u32, attempt_fn: F) -> Result<T>
    where
        F: Fn(u32) -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let mut attempt = 0u32;
        loop {
            match attempt_fn(attempt).await {
                Ok(value) => return Ok(value),
                Err(error) if error.is_retryable() && attempt + 1 < attempts => {
                    let delay =
                        delay_for_attempt(&self.config.retry, attempt, self.jitter.as_ref());
                    debug!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %error,
                        "Retrying after transient failure"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => {
                    warn!(attempt, error = %error, "Request failed");
                    return Err(error);
                }
            }
        }
    }

    // Request-time shaping failures below are terminal transport errors: no
    // status, never retryable. Configuration errors only exist at
    // construction.
    fn url(&self, path: &str) -> Result<Url> {
        if path.contains("://") || path.contains("..") {
            return Err(Error::transport(format!("invalid path: {path}"), false));
        }

        // Remove leading slash to avoid double slashes
        let path = path.trim_start_matches('/');

        self.config.base_url.join(path).map_err(|error| {
            Error::transport(
                format!(
                    "failed to append {path} to base URL {}: {error}",
                    self.config.base_url
                ),
                false,
            )
        })
    }

    fn json_headers(&self, options: &RequestOptions) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, self.bearer()?);

        // Configured defaults first, then per-call headers; later wins
        for (name, value) in self
            .config
            .default_headers
            .iter()
            .chain(options.headers.iter())
        {
            headers.insert(parse_header_name(name)?, parse_header_value(value)?);
        }

        debug!(headers = ?sanitize_headers(&headers), "Request headers");
        Ok(headers)
    }

    fn upload_headers(&self) -> Result<HeaderMap> {
        // The multipart encoder owns content-type and boundary; nothing else
        // is sent besides authorization
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.bearer()?);
        Ok(headers)
    }

    fn bearer(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.config.secret_key))
            .map_err(|error| Error::transport(format!("invalid secret key: {error}"), false))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<Option<T>> {
    let status = response.status();

    if !status.is_success() {
        let body = response
            .bytes()
            .await
            .ok()
            .and_then(|bytes| serde_json::from_slice::<Value>(&bytes).ok());
        return Err(Error::from_status(status.as_u16(), body));
    }

    if status == StatusCode::NO_CONTENT || response.content_length() == Some(0) {
        return Ok(None);
    }

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));
    if !is_json {
        return Ok(None);
    }

    let bytes = response.bytes().await.map_err(classify_transport)?;

    // Decode failures on a successful response count as "no payload"
    Ok(serde_json::from_slice(&bytes).ok())
}

fn build_form(field: &str, files: &[FileAttachment]) -> Result<Form> {
    let mut form = Form::new();
    for file in files {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|error| {
                Error::transport(
                    format!("invalid content type {}: {error}", file.content_type),
                    false,
                )
            })?;
        form = form.part(field.to_string(), part);
    }
    Ok(form)
}

fn classify_transport(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        return Error::transport("request timeout", true);
    }

    // Retryability goes by cause, not phase: TLS verification failures also
    // surface as connect errors and must not be retried
    let message = error_chain(&error);
    let retryable = is_transient(&message);
    Error::transport(message, retryable)
}

/// Flattens an error and its sources into one message; reqwest's display
/// alone hides the interesting part ("connection reset by peer" etc.).
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

/// Failure classes worth another attempt.
fn is_transient(message: &str) -> bool {
    const TRANSIENT: &[&str] = &[
        "connection reset",
        "connection refused",
        "timed out",
        "dns error",
        "failed to lookup address",
        "temporary failure in name resolution",
    ];

    let message = message.to_ascii_lowercase();
    TRANSIENT.iter().any(|needle| message.contains(needle))
}

fn sanitize_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if name == AUTHORIZATION {
                HeaderValue::from_static("[REDACTED]")
            } else {
                value.clone()
            };
            (name.clone(), value)
        })
        .collect()
}

fn parse_header_name(name: &str) -> Result<HeaderName> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|error| {
        Error::transport(format!("invalid header name {name}: {error}"), false)
    })
}

fn parse_header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|error| Error::transport(format!("invalid header value: {error}"), false))
}
