use std::rc::Rc;

use api::UploadSummary;
use dioxus::prelude::*;

use crate::core::format;
use crate::t;

#[component]
pub fn SummaryPanel(summary: Rc<UploadSummary>) -> Element {
    let stats = [
        (t!("summary-total"), summary.total_count.to_string()),
        (t!("summary-flowrate"), format::format_average(summary.avg_flowrate)),
        (t!("summary-pressure"), format::format_average(summary.avg_pressure)),
        (t!("summary-temperature"), format::format_average(summary.avg_temperature)),
    ];
    let uploaded = format::format_uploaded_at(&summary.uploaded_at);

    rsx! {
        section { class: "dashboard-card summary-panel",
            div { class: "dashboard-card__header",
                h2 { {t!("summary-title")} }
                span { class: "dashboard-card__meta", "#{summary.id} · {uploaded}" }
            }

            ul { class: "summary-panel__grid",
                for (label, value) in stats.into_iter() {
                    li { class: "summary-panel__item",
                        span { class: "summary-panel__label", "{label}" }
                        strong { class: "summary-panel__value", "{value}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SummaryPlaceholder() -> Element {
    rsx! {
        section { class: "dashboard-card dashboard-card--placeholder",
            p { class: "dashboard-card__placeholder", {t!("placeholder-title")} }
            p { class: "dashboard-card__hint", {t!("placeholder-columns")} }
        }
    }
}
