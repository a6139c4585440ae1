use std::sync::Arc;

use quillsign_domain::{CreateDocument, Document, RequestOptions, Result, UpdateDocument};
use reqwest::Method;

use crate::executor::Executor;

pub struct Documents {
    executor: Arc<Executor>,
}

impl Documents {
    pub(crate) fn new(executor: Arc<Executor>) -> Self {
        Self { executor }
    }

    pub async fn create(
        &self,
        request: &CreateDocument,
        options: &RequestOptions,
    ) -> Result<Option<Document>> {
        self.executor
            .execute_json(Method::POST, "/api/v1/documents", Some(request), options)
            .await
    }

    pub async fn get(&self, id: &str, options: &RequestOptions) -> Result<Option<Document>> {
        self.executor
            .execute_json(
                Method::GET,
                &format!("/api/v1/documents/{id}"),
                None::<&()>,
                options,
            )
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        request: &UpdateDocument,
        options: &RequestOptions,
    ) -> Result<Option<Document>> {
        self.executor
            .execute_json(
                Method::PUT,
                &format!("/api/v1/documents/{id}"),
                Some(request),
                options,
            )
            .await
    }

    pub async fn delete(&self, id: &str, options: &RequestOptions) -> Result<()> {
        self.executor
            .execute_json::<serde_json::Value, ()>(
                Method::DELETE,
                &format!("/api/v1/documents/{id}"),
                None,
                options,
            )
            .await?;
        Ok(())
    }
}
