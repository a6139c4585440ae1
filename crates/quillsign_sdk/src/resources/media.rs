use std::sync::Arc;

use quillsign_domain::{FileAttachment, MediaUpload, Result};

use crate::executor::Executor;

pub struct Media {
    executor: Arc<Executor>,
}

impl Media {
    pub(crate) fn new(executor: Arc<Executor>) -> Self {
        Self { executor }
    }

    /// Uploads one or more files as multipart form data.
    ///
    /// Uploads take no per-call options: they always use the full retry
    /// budget and a doubled per-attempt timeout.
    pub async fn upload(&self, files: &[FileAttachment]) -> Result<Option<MediaUpload>> {
        self.executor
            .execute_upload("/api/v1/media/upload", "files", files)
            .await
    }
}
