use std::sync::Arc;

use api::RawFile;
use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;

use crate::core::state::Notice;
use crate::core::upload::display_name;
use crate::t;

/// File picker and drop zone. Both sources end up as a single [`RawFile`] handed to `on_file`.
#[component]
pub fn UploadPanel(
    loading: bool,
    #[props(!optional)] notice: Option<Notice>,
    on_file: EventHandler<RawFile>,
) -> Element {
    let mut dragging = use_signal(|| false);

    let on_change = move |evt: FormEvent| {
        let files = evt.files();
        spawn(async move {
            if let Some(file) = first_file(files).await {
                on_file.call(file);
            }
        });
    };

    let on_drop = move |evt: DragEvent| {
        evt.prevent_default();
        dragging.set(false);
        if loading {
            return;
        }
        let files = evt.files();
        spawn(async move {
            if let Some(file) = first_file(files).await {
                on_file.call(file);
            }
        });
    };

    let zone_class = format!(
        "upload-panel__zone {}",
        if dragging() { "upload-panel__zone--dragging" } else { "" }
    );
    let button_label = if loading {
        t!("upload-uploading")
    } else {
        t!("upload-choose")
    };
    let status = notice.map(|notice| match notice {
        Notice::Uploaded(id) => t!("status-uploaded", id = id.to_string()),
        Notice::Viewing(id) => t!("status-viewing", id = id.to_string()),
    });

    rsx! {
        section { class: "dashboard-card upload-panel",
            div { class: "dashboard-card__header",
                h2 { {t!("upload-title")} }
            }

            div {
                class: "{zone_class}",
                ondragover: move |evt: DragEvent| {
                    evt.prevent_default();
                    dragging.set(true);
                },
                ondragleave: move |evt: DragEvent| {
                    evt.prevent_default();
                    dragging.set(false);
                },
                ondrop: on_drop,

                p { class: "upload-panel__hint", {t!("upload-drop-hint")} }
                label { class: "button button--primary upload-panel__browse",
                    "{button_label}"
                    input {
                        r#type: "file",
                        class: "upload-panel__input",
                        accept: ".csv",
                        disabled: loading,
                        onchange: on_change,
                    }
                }
            }

            if let Some(text) = status {
                p { class: "dashboard-card__meta upload-panel__status", "{text}" }
            }
        }
    }
}

/// Reads the first file of a pick or drop; any further files are ignored.
async fn first_file(files: Option<Arc<dyn FileEngine>>) -> Option<RawFile> {
    let engine = files?;
    let path = engine.files().into_iter().next()?;
    let bytes = engine.read_file(&path).await?;
    Some(RawFile::new(display_name(&path), bytes))
}
