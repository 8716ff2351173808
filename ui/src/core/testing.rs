//! In-memory backend double for unit tests.

use std::cell::{Cell, RefCell};

use api::{ApiError, Backend, RawFile, SummaryId, TypeDistribution, UploadSummary};
use async_trait::async_trait;

#[derive(Default)]
pub(crate) struct StubBackend {
    upload: RefCell<Option<Result<UploadSummary, ApiError>>>,
    history: RefCell<Option<Result<Vec<UploadSummary>, ApiError>>>,
    upload_calls: Cell<usize>,
    history_calls: Cell<usize>,
}

impl StubBackend {
    pub(crate) fn with_upload(self, outcome: Result<UploadSummary, ApiError>) -> Self {
        *self.upload.borrow_mut() = Some(outcome);
        self
    }

    pub(crate) fn with_history(self, outcome: Result<Vec<UploadSummary>, ApiError>) -> Self {
        *self.history.borrow_mut() = Some(outcome);
        self
    }

    pub(crate) fn upload_calls(&self) -> usize {
        self.upload_calls.get()
    }

    pub(crate) fn history_calls(&self) -> usize {
        self.history_calls.get()
    }

    pub(crate) fn sample_summary(id: u64) -> UploadSummary {
        UploadSummary {
            id: SummaryId(id),
            uploaded_at: format!("2024-01-{:02}T09:15:00Z", id.clamp(1, 28)),
            total_count: 3,
            avg_flowrate: Some(12.5),
            avg_pressure: Some(4.2),
            avg_temperature: Some(300.1),
            type_distribution: [("Pump", 2), ("Valve", 1)].into_iter().collect::<TypeDistribution>(),
        }
    }
}

#[async_trait(?Send)]
impl Backend for StubBackend {
    async fn upload(&self, _file: &RawFile) -> Result<UploadSummary, ApiError> {
        self.upload_calls.set(self.upload_calls.get() + 1);
        self.upload
            .borrow()
            .clone()
            .unwrap_or_else(|| Err(ApiError::Transport("no upload stubbed".into())))
    }

    async fn history(&self) -> Result<Vec<UploadSummary>, ApiError> {
        self.history_calls.set(self.history_calls.get() + 1);
        self.history
            .borrow()
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn report(&self, id: SummaryId) -> Result<Vec<u8>, ApiError> {
        Ok(format!("%PDF report {id}").into_bytes())
    }

    fn report_url(&self, id: SummaryId) -> String {
        format!("http://backend.test/api/report/{id}/")
    }
}
