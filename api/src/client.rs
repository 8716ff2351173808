//! Backend seam and its HTTP implementation.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{rejection_reason, ApiError};
use crate::types::{RawFile, SummaryId, UploadSummary};

/// Operations the UI needs from the analysis backend.
///
/// Every call is a single request: no retries, no client-side deadline. Futures are not
/// required to be `Send` because the browser build runs on a single-threaded executor.
#[async_trait(?Send)]
pub trait Backend {
    /// Sends `file` as the multipart field `file` and returns the computed summary unchanged.
    async fn upload(&self, file: &RawFile) -> Result<UploadSummary, ApiError>;

    /// Most-recent-first history exactly as the backend orders and bounds it.
    async fn history(&self) -> Result<Vec<UploadSummary>, ApiError>;

    /// Raw bytes of the generated report (a PDF) for `id`.
    async fn report(&self, id: SummaryId) -> Result<Vec<u8>, ApiError>;

    fn report_url(&self, id: SummaryId) -> String;
}

/// `reqwest`-backed [`Backend`].
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: ApiConfig,
    client: Client,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn upload(&self, file: &RawFile) -> Result<UploadSummary, ApiError> {
        let url = self.config.upload_url();
        debug!(%url, filename = %file.filename, bytes = file.bytes.len(), "uploading dataset");

        let part = Part::bytes(file.bytes.clone()).file_name(file.filename.clone());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;

        decode_json(response, "upload summary").await
    }

    async fn history(&self) -> Result<Vec<UploadSummary>, ApiError> {
        let url = self.config.history_url();
        debug!(%url, "fetching upload history");

        let response = self.client.get(&url).send().await.map_err(transport)?;
        decode_json(response, "history list").await
    }

    async fn report(&self, id: SummaryId) -> Result<Vec<u8>, ApiError> {
        let url = self.config.report_url(id);
        debug!(%url, "fetching report");

        let response = self.client.get(&url).send().await.map_err(transport)?;
        let response = reject_failure(response).await?;
        let bytes = response.bytes().await.map_err(transport)?;
        Ok(bytes.to_vec())
    }

    fn report_url(&self, id: SummaryId) -> String {
        self.config.report_url(id)
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Turns a non-2xx response into [`ApiError::Rejected`], keeping the backend's reason if any.
async fn reject_failure(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let reason = rejection_reason(&body);
    warn!(status = status.as_u16(), reason = ?reason, "backend rejected request");
    Err(ApiError::Rejected {
        status: status.as_u16(),
        reason,
    })
}

async fn decode_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, ApiError> {
    let response = reject_failure(response).await?;
    let body = response.text().await.map_err(transport)?;
    serde_json::from_str(&body).map_err(|err| {
        ApiError::MalformedResponse(format!("Failed to parse {what}: {err}"))
    })
}
