use std::sync::Arc;

use quillsign_domain::{CreateEmbeddedSession, EmbeddedSession, RequestOptions, Result};
use reqwest::Method;

use crate::executor::Executor;

pub struct Embedded {
    executor: Arc<Executor>,
}

impl Embedded {
    pub(crate) fn new(executor: Arc<Executor>) -> Self {
        Self { executor }
    }

    pub async fn create_session(
        &self,
        request: &CreateEmbeddedSession,
        options: &RequestOptions,
    ) -> Result<Option<EmbeddedSession>> {
        self.executor
            .execute_json(
                Method::POST,
                "/api/v1/embedded/sessions",
                Some(request),
                options,
            )
            .await
    }
}
