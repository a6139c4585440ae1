use std::sync::Arc;

use quillsign_domain::{
    CreateSignatureRequest, RequestOptions, Result, SignatureRequest, SignatureRequestStatus,
};
use reqwest::Method;

use crate::executor::Executor;

pub struct Signatures {
    executor: Arc<Executor>,
}

impl Signatures {
    pub(crate) fn new(executor: Arc<Executor>) -> Self {
        Self { executor }
    }

    pub async fn create(
        &self,
        request: &CreateSignatureRequest,
        options: &RequestOptions,
    ) -> Result<Option<SignatureRequest>> {
        self.executor
            .execute_json(
                Method::POST,
                "/api/v1/signatures/requests",
                Some(request),
                options,
            )
            .await
    }

    pub async fn status(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<Option<SignatureRequestStatus>> {
        self.executor
            .execute_json(
                Method::GET,
                &format!("/api/v1/signatures/requests/{id}/status"),
                None::<&()>,
                options,
            )
            .await
    }

    pub async fn cancel(&self, id: &str, options: &RequestOptions) -> Result<()> {
        self.executor
            .execute_json::<serde_json::Value, ()>(
                Method::DELETE,
                &format!("/api/v1/signatures/requests/{id}"),
                None,
                options,
            )
            .await?;
        Ok(())
    }
}
