//! Recent-upload history: wholesale refreshes and local selection.

use std::rc::Rc;

use api::{ApiError, Backend, UploadSummary};
use tracing::debug;

/// Fetches the full history window. The backend orders and bounds it; nothing is re-sorted
/// or truncated here.
pub async fn refresh<B: Backend + ?Sized>(
    backend: &B,
) -> Result<Vec<Rc<UploadSummary>>, ApiError> {
    let entries = backend.history().await?;
    debug!(entries = entries.len(), "history refreshed");
    Ok(entries.into_iter().map(Rc::new).collect())
}

/// Hands back the very entry that was picked, ready to become the current summary.
pub fn select(entry: &Rc<UploadSummary>) -> Rc<UploadSummary> {
    Rc::clone(entry)
}
