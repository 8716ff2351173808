use api::TypeDistribution;
use dioxus::prelude::*;

use crate::core::chart::{chart_series, Bar};
use crate::t;

/// Bar chart of equipment counts per type. Renders nothing for an empty distribution.
#[component]
pub fn TypeChart(distribution: TypeDistribution) -> Element {
    let Some(series) = chart_series(Some(&distribution)) else {
        return rsx! {};
    };
    let max = series.max_value();

    rsx! {
        section { class: "dashboard-card type-chart",
            div { class: "dashboard-card__header",
                h2 { {t!("chart-title")} }
                span { class: "dashboard-card__meta", {t!("chart-count")} }
            }

            div {
                class: "type-chart__plot",
                role: "img",
                aria_label: series.labels.join(", "),
                span { class: "type-chart__axis-max", "{max}" }
                div { class: "type-chart__bars",
                    for bar in series.bars() {
                        {render_bar(bar)}
                    }
                }
            }
        }
    }
}

fn render_bar(bar: Bar<'_>) -> Element {
    let style = format!(
        "height: {:.1}%; background: {}; border-color: {};",
        bar.height_pct, bar.color, bar.border
    );

    rsx! {
        div { key: "{bar.label}", class: "type-chart__column",
            span { class: "type-chart__value", "{bar.value}" }
            div { class: "type-chart__track",
                div { class: "type-chart__bar", style: "{style}" }
            }
            span { class: "type-chart__label", "{bar.label}" }
        }
    }
}
