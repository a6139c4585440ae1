use std::sync::Arc;

use quillsign_domain::{KycShare, RequestOptions, Result, ShareKyc};
use reqwest::Method;

use crate::executor::Executor;

pub struct Kyc {
    executor: Arc<Executor>,
}

impl Kyc {
    pub(crate) fn new(executor: Arc<Executor>) -> Self {
        Self { executor }
    }

    /// Shares verified identity attributes with another account.
    pub async fn share(
        &self,
        request: &ShareKyc,
        options: &RequestOptions,
    ) -> Result<Option<KycShare>> {
        self.executor
            .execute_json(Method::POST, "/api/v1/kyc/share", Some(request), options)
            .await
    }
}
