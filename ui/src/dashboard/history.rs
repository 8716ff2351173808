use std::rc::Rc;

use api::{SummaryId, UploadSummary};
use dioxus::prelude::*;

use crate::core::{format, history};
use crate::t;

#[component]
pub fn HistoryPanel(
    entries: Vec<Rc<UploadSummary>>,
    #[props(!optional)] active_id: Option<SummaryId>,
    on_select: EventHandler<Rc<UploadSummary>>,
    on_report: EventHandler<SummaryId>,
) -> Element {
    let rows: Vec<HistoryRow> = entries
        .iter()
        .map(|entry| HistoryRow {
            is_active: active_id == Some(entry.id),
            timestamp: format::format_uploaded_at(&entry.uploaded_at),
            records: t!("history-records", count = entry.total_count.to_string()),
            entry: entry.clone(),
        })
        .collect();

    rsx! {
        section { class: "dashboard-card history-panel",
            div { class: "dashboard-card__header",
                h2 { {t!("history-title")} }
                if !entries.is_empty() {
                    span { class: "dashboard-card__meta", "{entries.len()}" }
                }
            }

            if rows.is_empty() {
                p { class: "dashboard-card__placeholder", {t!("history-empty")} }
            } else {
                ul { class: "history-panel__items",
                    for row in rows.into_iter() {
                        {render_row(row, on_select, on_report)}
                    }
                }
            }
        }
    }
}

#[derive(Clone)]
struct HistoryRow {
    entry: Rc<UploadSummary>,
    is_active: bool,
    timestamp: String,
    records: String,
}

fn render_row(
    row: HistoryRow,
    on_select: EventHandler<Rc<UploadSummary>>,
    on_report: EventHandler<SummaryId>,
) -> Element {
    let HistoryRow {
        entry,
        is_active,
        timestamp,
        records,
    } = row;

    let id = entry.id;
    let download_label = t!("history-download");

    rsx! {
        li {
            key: "{id}",
            class: format!(
                "history-panel__item {}",
                if is_active { "history-panel__item--active" } else { "" }
            ),
            button {
                r#type: "button",
                class: "history-panel__select",
                onclick: move |_| on_select.call(history::select(&entry)),

                span { class: "history-panel__id", "#{id}" }
                span { class: "history-panel__timestamp", "{timestamp}" }
                span { class: "history-panel__count", "{records}" }
            }
            button {
                r#type: "button",
                class: "button button--ghost history-panel__download",
                onclick: move |_| on_report.call(id),
                "{download_label}"
            }
        }
    }
}
