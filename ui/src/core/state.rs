//! Application state and its transitions.
//!
//! The dashboard owns exactly one [`AppState`]. Every change goes through [`reduce`], which maps
//! `(state, event)` to a fresh snapshot plus the [`Command`]s to run afterwards. Commands are
//! executed only after the new snapshot has been published, so a successful upload is visible
//! before the history refresh it triggers goes out.
//!
//! History refreshes can overlap (startup and post-upload). Each one carries a sequence number
//! and a response older than the list already shown is dropped.
//!
//! Overlapping uploads are not allowed: a file acquired while an upload is in flight is dropped.
//! A history click during an upload is applied immediately; the upload result still wins when it
//! lands, since it is the newer user intent.

use std::rc::Rc;

use api::{ApiError, RawFile, SummaryId, UploadSummary};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Summary on display. Always a whole backend record, never patched.
    pub current: Option<Rc<UploadSummary>>,
    /// Most-recent-first, exactly as last returned by the backend.
    pub history: Vec<Rc<UploadSummary>>,
    /// True strictly while an upload request is in flight.
    pub loading: bool,
    /// Message from the last failed upload; cleared when the next one starts.
    pub error: Option<String>,
    pub notice: Option<Notice>,
    pub started: bool,
    /// Sequence number handed to the last refresh request.
    pub refreshes_issued: u64,
    /// Sequence number of the refresh that produced `history`.
    pub history_seq: u64,
}

impl AppState {
    pub fn is_current(&self, id: SummaryId) -> bool {
        self.current.as_ref().is_some_and(|current| current.id == id)
    }

    fn next_refresh(&mut self) -> Command {
        self.refreshes_issued += 1;
        Command::RefreshHistory {
            seq: self.refreshes_issued,
        }
    }
}

/// Short status line shown under the upload area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Uploaded(SummaryId),
    Viewing(SummaryId),
}

#[derive(Debug, Clone)]
pub enum Event {
    /// First activation of the dashboard.
    Startup,
    /// A file came from the picker or a drop.
    FileAcquired(RawFile),
    UploadFinished(Result<UploadSummary, ApiError>),
    HistoryLoaded {
        seq: u64,
        entries: Vec<Rc<UploadSummary>>,
    },
    HistoryFailed(ApiError),
    HistorySelected(Rc<UploadSummary>),
    ReportRequested(SummaryId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    RefreshHistory { seq: u64 },
    Upload(RawFile),
    OpenReport(SummaryId),
}

pub fn reduce(state: &AppState, event: Event) -> (AppState, Vec<Command>) {
    let mut next = state.clone();

    let commands = match event {
        Event::Startup => {
            if state.started {
                debug!("startup already handled");
                Vec::new()
            } else {
                next.started = true;
                vec![next.next_refresh()]
            }
        }
        Event::FileAcquired(file) => {
            if state.loading {
                warn!(filename = %file.filename, "upload already in flight; ignoring file");
                Vec::new()
            } else {
                next.loading = true;
                next.error = None;
                next.notice = None;
                vec![Command::Upload(file)]
            }
        }
        Event::UploadFinished(Ok(summary)) => {
            next.notice = Some(Notice::Uploaded(summary.id));
            next.current = Some(Rc::new(summary));
            next.loading = false;
            vec![next.next_refresh()]
        }
        Event::UploadFinished(Err(err)) => {
            next.error = Some(err.user_message());
            next.loading = false;
            Vec::new()
        }
        Event::HistoryLoaded { seq, entries } => {
            if seq > state.history_seq {
                next.history = entries;
                next.history_seq = seq;
            } else {
                debug!(seq, shown = state.history_seq, "stale history response dropped");
            }
            Vec::new()
        }
        Event::HistoryFailed(err) => {
            warn!(error = %err, "history refresh failed; keeping previous entries");
            Vec::new()
        }
        Event::HistorySelected(entry) => {
            if state.history.is_empty() {
                debug!(id = %entry.id, "selection ignored; history is empty");
            } else {
                next.notice = Some(Notice::Viewing(entry.id));
                next.current = Some(entry);
            }
            Vec::new()
        }
        Event::ReportRequested(id) => vec![Command::OpenReport(id)],
    };

    (next, commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::StubBackend;

    fn csv(name: &str) -> RawFile {
        RawFile::new(name, b"Equipment Name,Type\n".to_vec())
    }

    fn with_history(ids: &[u64]) -> AppState {
        AppState {
            history: ids
                .iter()
                .map(|id| Rc::new(StubBackend::sample_summary(*id)))
                .collect(),
            started: true,
            ..AppState::default()
        }
    }

    #[test]
    fn startup_refreshes_history_once() {
        let (state, commands) = reduce(&AppState::default(), Event::Startup);
        assert_eq!(commands, [Command::RefreshHistory { seq: 1 }]);
        assert!(state.started);

        let (again, commands) = reduce(&state, Event::Startup);
        assert!(commands.is_empty());
        assert_eq!(again, state);
    }

    #[test]
    fn empty_history_on_startup_shows_placeholder() {
        let (state, _) = reduce(&AppState::default(), Event::Startup);
        let (state, commands) = reduce(
            &state,
            Event::HistoryLoaded {
                seq: 1,
                entries: Vec::new(),
            },
        );
        assert!(commands.is_empty());
        assert!(state.history.is_empty());
        assert!(state.current.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn file_acquired_starts_upload_and_clears_error() {
        let before = AppState {
            error: Some("old failure".into()),
            ..with_history(&[1])
        };
        let (state, commands) = reduce(&before, Event::FileAcquired(csv("equipment.csv")));
        assert!(state.loading);
        assert_eq!(state.error, None);
        assert_eq!(commands, [Command::Upload(csv("equipment.csv"))]);
    }

    #[test]
    fn second_file_while_loading_is_ignored() {
        let (loading, _) = reduce(&AppState::default(), Event::FileAcquired(csv("a.csv")));
        let (state, commands) = reduce(&loading, Event::FileAcquired(csv("b.csv")));
        assert!(commands.is_empty());
        assert_eq!(state, loading);
    }

    #[test]
    fn successful_upload_sets_current_then_refreshes() {
        let (loading, _) = reduce(&with_history(&[1]), Event::FileAcquired(csv("a.csv")));
        let summary = StubBackend::sample_summary(2);

        let (state, commands) = reduce(&loading, Event::UploadFinished(Ok(summary.clone())));
        assert_eq!(state.current.as_deref(), Some(&summary));
        assert!(!state.loading);
        assert_eq!(state.notice, Some(Notice::Uploaded(SummaryId(2))));
        assert_eq!(commands, [Command::RefreshHistory { seq: 1 }]);
        assert_eq!(state.history, loading.history);
    }

    #[test]
    fn failed_upload_keeps_current_summary() {
        let mut before = with_history(&[1]);
        before.current = Some(before.history[0].clone());
        let (loading, _) = reduce(&before, Event::FileAcquired(csv("bad.csv")));

        let rejection = ApiError::Rejected {
            status: 400,
            reason: Some("missing column Flowrate".into()),
        };
        let (state, commands) = reduce(&loading, Event::UploadFinished(Err(rejection)));
        assert!(commands.is_empty());
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("missing column Flowrate"));
        assert!(Rc::ptr_eq(
            state.current.as_ref().unwrap(),
            before.current.as_ref().unwrap()
        ));
    }

    #[test]
    fn failed_upload_without_reason_uses_fallback() {
        let (loading, _) = reduce(&AppState::default(), Event::FileAcquired(csv("a.csv")));
        let failure = ApiError::Rejected {
            status: 500,
            reason: None,
        };
        let (state, _) = reduce(&loading, Event::UploadFinished(Err(failure)));
        assert_eq!(state.error.as_deref(), Some(api::UPLOAD_FAILED_FALLBACK));
    }

    #[test]
    fn late_startup_refresh_does_not_overwrite_newer_history() {
        let (started, _) = reduce(&AppState::default(), Event::Startup);
        let (loading, _) = reduce(&started, Event::FileAcquired(csv("a.csv")));
        let (uploaded, commands) = reduce(
            &loading,
            Event::UploadFinished(Ok(StubBackend::sample_summary(7))),
        );
        assert_eq!(commands, [Command::RefreshHistory { seq: 2 }]);

        let newer = vec![Rc::new(StubBackend::sample_summary(7))];
        let (fresh, _) = reduce(
            &uploaded,
            Event::HistoryLoaded {
                seq: 2,
                entries: newer.clone(),
            },
        );
        let (state, _) = reduce(
            &fresh,
            Event::HistoryLoaded {
                seq: 1,
                entries: Vec::new(),
            },
        );
        assert_eq!(state.history, newer);
        assert_eq!(state.history_seq, 2);
    }

    #[test]
    fn early_response_is_applied_until_a_newer_one_lands() {
        let mut before = with_history(&[]);
        before.refreshes_issued = 2;
        let older = vec![Rc::new(StubBackend::sample_summary(1))];
        let (state, _) = reduce(
            &before,
            Event::HistoryLoaded {
                seq: 1,
                entries: older.clone(),
            },
        );
        assert_eq!(state.history, older);
        assert_eq!(state.history_seq, 1);
    }

    #[test]
    fn failed_history_refresh_keeps_entries() {
        let before = with_history(&[3, 2, 1]);
        let (state, commands) = reduce(
            &before,
            Event::HistoryFailed(ApiError::Transport("offline".into())),
        );
        assert!(commands.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn selecting_history_entry_points_at_it() {
        let before = with_history(&[3, 2, 1]);
        let picked = before.history[1].clone();

        let (state, commands) = reduce(&before, Event::HistorySelected(picked.clone()));
        assert!(commands.is_empty());
        assert!(Rc::ptr_eq(state.current.as_ref().unwrap(), &picked));
        assert_eq!(state.notice, Some(Notice::Viewing(SummaryId(2))));
        assert_eq!(state.history, before.history);
        assert!(state.is_current(SummaryId(2)));
        assert!(!state.is_current(SummaryId(3)));
    }

    #[test]
    fn selection_with_empty_history_is_ignored() {
        let stray = Rc::new(StubBackend::sample_summary(8));
        let (state, _) = reduce(&AppState::default(), Event::HistorySelected(stray));
        assert!(state.current.is_none());
    }

    #[test]
    fn selection_during_upload_is_applied_then_superseded() {
        let before = with_history(&[3, 2]);
        let (loading, _) = reduce(&before, Event::FileAcquired(csv("a.csv")));

        let (viewing, _) = reduce(&loading, Event::HistorySelected(before.history[1].clone()));
        assert!(viewing.loading);
        assert!(viewing.is_current(SummaryId(2)));

        let fresh = StubBackend::sample_summary(4);
        let (state, _) = reduce(&viewing, Event::UploadFinished(Ok(fresh)));
        assert!(state.is_current(SummaryId(4)));
    }

    #[test]
    fn report_request_only_emits_command() {
        let before = with_history(&[3]);
        let (state, commands) = reduce(&before, Event::ReportRequested(SummaryId(3)));
        assert_eq!(commands, [Command::OpenReport(SummaryId(3))]);
        assert_eq!(state, before);
    }

    #[test]
    fn error_survives_until_next_upload() {
        let (loading, _) = reduce(&with_history(&[1]), Event::FileAcquired(csv("a.csv")));
        let (failed, _) = reduce(
            &loading,
            Event::UploadFinished(Err(ApiError::Transport("reset".into()))),
        );
        assert_eq!(failed.error.as_deref(), Some(api::UPLOAD_UNREACHABLE_MESSAGE));

        let (viewing, _) = reduce(&failed, Event::HistorySelected(failed.history[0].clone()));
        assert!(viewing.error.is_some());

        let (retry, commands) = reduce(&viewing, Event::FileAcquired(csv("a.csv")));
        assert_eq!(retry.error, None);
        assert_eq!(commands.len(), 1);
    }
}
