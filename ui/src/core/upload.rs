//! Upload coordination: one raw file in, one summary (or one failure) out.

use api::{ApiError, Backend, RawFile, UploadSummary};
use tracing::{info, warn};

/// Submits `file` to the backend.
///
/// Files without a `.csv` extension are refused locally, without a request. That check is only
/// a convenience for the user; the backend validates contents. Otherwise exactly one request is
/// made and its outcome is returned untouched.
pub async fn submit_upload<B: Backend + ?Sized>(
    backend: &B,
    file: &RawFile,
) -> Result<UploadSummary, ApiError> {
    if !file.has_csv_extension() {
        warn!(filename = %file.filename, "refusing upload of non-CSV file");
        return Err(ApiError::UnsupportedFile(file.filename.clone()));
    }

    match backend.upload(file).await {
        Ok(summary) => {
            info!(id = %summary.id, rows = summary.total_count, "upload accepted");
            Ok(summary)
        }
        Err(err) => {
            warn!(filename = %file.filename, error = %err, "upload failed");
            Err(err)
        }
    }
}

/// Name shown for a picked or dropped file. Desktop file engines hand back full paths.
pub fn display_name(path: &str) -> String {
    path.rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(path)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::StubBackend;
    use futures::executor::block_on;

    #[test]
    fn non_csv_files_never_reach_the_backend() {
        let backend = StubBackend::default();
        let file = RawFile::new("plant.xlsx", b"binary".to_vec());

        let outcome = block_on(submit_upload(&backend, &file));
        assert_eq!(
            outcome,
            Err(ApiError::UnsupportedFile("plant.xlsx".to_string()))
        );
        assert_eq!(backend.upload_calls(), 0);
    }

    #[test]
    fn success_is_returned_unchanged_after_one_call() {
        let summary = StubBackend::sample_summary(1);
        let backend = StubBackend::default().with_upload(Ok(summary.clone()));
        let file = RawFile::new("equipment.csv", b"a,b".to_vec());

        let outcome = block_on(submit_upload(&backend, &file));
        assert_eq!(outcome, Ok(summary));
        assert_eq!(backend.upload_calls(), 1);
    }

    #[test]
    fn failures_are_passed_through() {
        let rejection = ApiError::Rejected {
            status: 400,
            reason: Some("CSV file is empty.".into()),
        };
        let backend = StubBackend::default().with_upload(Err(rejection.clone()));
        let file = RawFile::new("empty.csv", Vec::new());

        assert_eq!(block_on(submit_upload(&backend, &file)), Err(rejection));
        assert_eq!(backend.upload_calls(), 1);
    }

    #[test]
    fn display_name_strips_directories() {
        assert_eq!(display_name("/home/op/data/equipment.csv"), "equipment.csv");
        assert_eq!(display_name(r"C:\plant\pumps.csv"), "pumps.csv");
        assert_eq!(display_name("equipment.csv"), "equipment.csv");
        assert_eq!(display_name("dir/"), "dir/");
    }
}
