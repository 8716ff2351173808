mod chart;
pub use chart::TypeChart;

mod history;
pub use history::HistoryPanel;

mod summary;
pub use summary::{SummaryPanel, SummaryPlaceholder};

mod upload;
pub use upload::UploadPanel;

use std::rc::Rc;

use api::{ApiConfig, Backend, HttpBackend, RawFile, SummaryId, UploadSummary};
use dioxus::prelude::*;

use crate::core::session::perform;
use crate::core::state::{reduce, AppState, Event};

/// Dashboard state plus the backend it talks to, shared through context.
///
/// Launchers create it with [`use_dashboard_session`] above any subtree that remounts (the
/// language switch re-keys the routed view), so the summary on display survives a remount.
#[derive(Clone)]
pub struct DashboardSession {
    state: Signal<AppState>,
    backend: Rc<dyn Backend>,
}

impl DashboardSession {
    /// Must be called inside a Dioxus runtime; the state signal is owned by the current scope.
    pub fn new(backend: Rc<dyn Backend>) -> Self {
        Self {
            state: Signal::new(AppState::default()),
            backend,
        }
    }

    pub fn state(&self) -> Signal<AppState> {
        self.state
    }

    /// Applies `event`, publishes the new snapshot, then runs the resulting commands. Completion
    /// events are fed back through here, so every transition goes through the reducer.
    ///
    /// Commands run as root-scope tasks so they outlive the component that triggered them.
    pub fn dispatch(&self, event: Event) {
        let mut state = self.state;
        let (next, commands) = reduce(&state.peek(), event);
        state.set(next);

        for command in commands {
            let session = self.clone();
            spawn_forever(async move {
                if let Some(follow_up) = perform(&*session.backend, command).await {
                    session.dispatch(follow_up);
                }
            });
        }
    }
}

/// Provides a [`DashboardSession`] backed by the HTTP client to everything below the caller.
pub fn use_dashboard_session() -> DashboardSession {
    use_context_provider(|| {
        let backend: Rc<dyn Backend> = Rc::new(HttpBackend::new(ApiConfig::from_build_env()));
        DashboardSession::new(backend)
    })
}

/// Upload area, history and the current summary wired to the session's [`AppState`].
#[component]
pub fn Dashboard() -> Element {
    let session = use_context::<DashboardSession>();

    // Effects run after the first render; a remount finds `started` set and does nothing.
    use_effect({
        let session = session.clone();
        move || session.dispatch(Event::Startup)
    });

    let snapshot = session.state()();
    let active_id = snapshot.current.as_ref().map(|current| current.id);

    let on_file = {
        let session = session.clone();
        move |file: RawFile| session.dispatch(Event::FileAcquired(file))
    };
    let on_select = {
        let session = session.clone();
        move |entry: Rc<UploadSummary>| session.dispatch(Event::HistorySelected(entry))
    };
    let on_report = {
        let session = session.clone();
        move |id: SummaryId| session.dispatch(Event::ReportRequested(id))
    };

    rsx! {
        div { class: "dashboard",
            aside { class: "dashboard__sidebar",
                UploadPanel {
                    loading: snapshot.loading,
                    notice: snapshot.notice,
                    on_file: on_file,
                }

                if let Some(message) = snapshot.error.as_ref() {
                    p { class: "dashboard__error", role: "alert", "{message}" }
                }

                HistoryPanel {
                    entries: snapshot.history.clone(),
                    active_id: active_id,
                    on_select: on_select,
                    on_report: on_report,
                }
            }

            section { class: "dashboard__content",
                match snapshot.current.clone() {
                    Some(summary) => rsx! {
                        SummaryPanel { summary: summary.clone() }
                        TypeChart { distribution: summary.type_distribution.clone() }
                    },
                    None => rsx! { SummaryPlaceholder {} },
                }
            }
        }
    }
}
