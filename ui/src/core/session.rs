//! Runs the commands emitted by [`reduce`](super::state::reduce).

use api::Backend;
use tracing::{info, warn};

use super::state::{Command, Event};
use super::{history, platform, upload};

/// Executes one command and returns the event reporting its completion, if it has one.
///
/// Report requests are fire-and-forget: the outcome is logged and nothing flows back into the
/// state machine.
pub async fn perform<B: Backend + ?Sized>(backend: &B, command: Command) -> Option<Event> {
    match command {
        Command::RefreshHistory { seq } => Some(match history::refresh(backend).await {
            Ok(entries) => Event::HistoryLoaded { seq, entries },
            Err(err) => Event::HistoryFailed(err),
        }),
        Command::Upload(file) => Some(Event::UploadFinished(
            upload::submit_upload(backend, &file).await,
        )),
        Command::OpenReport(id) => {
            match platform::open_report(backend, id).await {
                Ok(location) => info!(%id, %location, "report opened"),
                Err(err) => warn!(%id, error = %err, "report could not be opened"),
            }
            None
        }
    }
}
