//! Standalone Emissions Heatmap
//!
//! A single grid heatmap of the top emitting countries, with a metric
//! selector for the color encoding. Only countries among the top N by
//! total emissions in the latest year are shown; clicking a cell pins a
//! textual annotation (total, rank) under the controls.
//!
//! Data flow mirrors the dashboard app: one HTTP fetch on mount, parse,
//! validate, then re-render the heatmap whenever the metric changes.

use dioxus::prelude::*;
use fce_chart_ui::components::{
    ChartContainer, ChartHeader, ClearSelectionButton, ErrorDisplay, LoadingSpinner,
    MetricSelector,
};
use fce_chart_ui::state::AppState;
use fce_chart_ui::{fetch, js_bridge, payload};
use fce_data::dataset::EmissionDataset;
use fce_data::ranking::RankTable;
use fce_data::record::parse_records;
use fce_data::selection::SelectionEvent;

/// Per-country emissions CSV (15 highest-emitting countries, 2003-2023).
const DATA_URL: &str =
    "https://raw.githubusercontent.com/bettyzzzr/fall2024-iv-final-project-data/refs/heads/main/15%E5%9B%BD%E7%A2%B3%E6%8E%92%E6%94%BE.csv";

/// How many countries (by latest-year total) the heatmap shows.
const TOP_COUNTRY_COUNT: usize = 15;

/// Allowed deviation between the category sum and the record total,
/// as a percentage of the total.
const CATEGORY_SUM_TOLERANCE_PCT: f64 = 5.0;

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "emissions-heatmap";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("emissions-heatmap-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // One-time setup: chart scripts, click channel, fetch.
    use_effect(move || {
        js_bridge::init_charts();

        let mut selection = state.selection;
        js_bridge::set_cell_click_handler(move |country, year| {
            let next = selection
                .read()
                .apply(SelectionEvent::CellActivated { country, year });
            selection.set(next);
        });

        spawn(async move {
            match fetch::fetch_csv(DATA_URL).await {
                Ok(csv_text) => {
                    let dataset = EmissionDataset::new(parse_records(&csv_text));
                    if dataset.is_empty() {
                        state
                            .error_msg
                            .set(Some("The emissions dataset contains no records.".to_string()));
                        state.loading.set(false);
                        return;
                    }
                    for issue in dataset.validate(CATEGORY_SUM_TOLERANCE_PCT) {
                        log::warn!("data quality: {}", issue);
                    }
                    state.dataset.set(dataset);
                    state.loading.set(false);
                }
                Err(e) => {
                    log::error!("loading emissions data failed: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load emissions data: {}", e)));
                    state.loading.set(false);
                }
            }
        });
    });

    // Heatmap re-renders on dataset or metric change.
    use_effect(move || {
        let dataset = state.dataset.read();
        let metric = (state.metric)();
        if (state.loading)() || (state.error_msg)().is_some() || dataset.is_empty() {
            return;
        }

        let rankings = RankTable::compute(&dataset);
        // keep the y-axis ordered by overall emissions, restricted to the
        // latest-year top N
        let top = dataset.top_countries(TOP_COUNTRY_COUNT);
        let countries: Vec<String> = dataset
            .countries()
            .into_iter()
            .filter(|c| top.contains(c))
            .collect();
        let years = dataset.years();
        let cells = payload::heatmap_cells(&dataset, metric, &rankings, &countries);

        let data_json = serde_json::to_string(&cells).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "years": years,
            "countries": countries,
            "metricLabel": metric.label(),
        }))
        .unwrap_or_default();
        js_bridge::render_heatmap(CHART_ID, &data_json, &config_json);
    });

    // Annotation for the pinned cell, derived on the fly from the dataset.
    let annotation = {
        let dataset = state.dataset.read();
        (state.selection)().bound().and_then(|(country, year)| {
            let record = dataset.record_for(country, year)?;
            let rank = RankTable::compute(&dataset)
                .get(country, year)
                .map(|label| format!(", rank {}", label))
                .unwrap_or_default();
            Some(format!(
                "{} {}: {:.1} Mt CO2{}",
                country, year, record.total, rank
            ))
        })
    };

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "CO2 Emissions Heatmap".to_string(),
                unit_description: format!(
                    "Top {} emitting countries by latest-year total. Cell size: total emissions (Mt CO2), cell color: selected metric.",
                    TOP_COUNTRY_COUNT
                ),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: center; margin-bottom: 8px;",
                    MetricSelector {}
                    ClearSelectionButton {}
                }

                if let Some(text) = annotation {
                    p {
                        style: "margin: 4px 0; font-size: 13px;",
                        strong { "Selected: " }
                        "{text}"
                    }
                }

                ChartContainer {
                    id: CHART_ID.to_string(),
                    loading: false,
                    min_height: 600,
                }
            }
        }
    }
}
