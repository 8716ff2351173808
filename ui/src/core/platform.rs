//! Platform glue for side effects the state machine does not model.

use api::{Backend, SummaryId};

/// Opens the report for `id` outside the app.
///
/// Web: a new browsing context on the report endpoint, the browser handles the download.
/// Native: there is no browser to hand the URL to, so the PDF is fetched and written to the
/// per-user reports directory. Returns where the report went.
pub async fn open_report<B: Backend + ?Sized>(backend: &B, id: SummaryId) -> Result<String, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let url = backend.report_url(id);
        let window = web_sys::window().ok_or("window unavailable")?;
        window
            .open_with_url_and_target(&url, "_blank")
            .map_err(|_| "Unable to open report window".to_string())?;
        Ok(url)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;

        let bytes = backend.report(id).await.map_err(|err| err.to_string())?;
        let dir = desktop_report_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(report_filename(id));
        fs::write(&path, bytes).map_err(|err| err.to_string())?;
        Ok(path.to_string_lossy().to_string())
    }
}

/// Same name the backend suggests in its `Content-Disposition` header.
pub fn report_filename(id: SummaryId) -> String {
    format!("report_dataset_{id}.pdf")
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_report_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("com", "Chemviz", "Chemviz")
        .ok_or("Unable to determine report directory")?;
    Ok(dirs.data_dir().join("reports"))
}
