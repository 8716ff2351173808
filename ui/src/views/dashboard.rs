use dioxus::prelude::*;
use tracing::trace;

use crate::dashboard::Dashboard;

#[component]
pub fn DashboardPage() -> Element {
    // Subscribe to the shared language code (if provided) so labels re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang = lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());
    trace!(%lang, "dashboard page render");

    rsx! {
        section { class: "page page-dashboard",
            header { class: "page-dashboard__header",
                h1 { {crate::t!("page-dashboard-title")} }
                p { class: "page-dashboard__intro", {crate::t!("page-dashboard-intro")} }
            }

            Dashboard {}
        }
    }
}
