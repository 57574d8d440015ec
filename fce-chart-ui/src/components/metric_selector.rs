//! Metric selector for heatmap color encoding.

use crate::state::AppState;
use dioxus::prelude::*;
use fce_data::metric::Metric;

/// Dropdown selector for the heatmap color metric.
///
/// The metric affects color only; cell size always tracks total emissions.
#[component]
pub fn MetricSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.metric)();

    let on_change = move |evt: Event<FormData>| {
        match evt.value().parse::<Metric>() {
            Ok(metric) => state.metric.set(metric),
            Err(e) => log::warn!("ignoring metric selection: {}", e),
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "metric-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Color by: "
            }
            select {
                id: "metric-select",
                onchange: on_change,
                for metric in Metric::ALL {
                    option {
                        value: "{metric}",
                        selected: metric == current,
                        "{metric.label()}"
                    }
                }
            }
        }
    }
}
