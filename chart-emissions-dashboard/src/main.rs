//! Fossil CO2 Analysis Dashboard
//!
//! A grid heatmap of per-country emissions (2003-2023) coordinated with a
//! category-breakdown pie chart and an emissions/GDP trend line chart.
//! Clicking a heatmap cell selects that (country, year); both companion
//! views update from the same selection.
//!
//! Data flow:
//! 1. On mount, the emissions CSV is fetched once over HTTP and parsed
//!    into an `EmissionDataset` (a failed fetch is terminal: the app shows
//!    an error for the rest of the session).
//! 2. Data-quality findings (category sums vs. totals, duplicate rows)
//!    are logged as warnings and never abort loading.
//! 3. A heatmap effect re-renders on dataset/metric changes; a selection
//!    effect re-renders the pie and line views on every selection change.

use dioxus::prelude::*;
use fce_chart_ui::components::{
    ChartContainer, ChartHeader, ClearSelectionButton, ErrorDisplay, LoadingSpinner,
    MetricSelector,
};
use fce_chart_ui::state::AppState;
use fce_chart_ui::{fetch, js_bridge, payload};
use fce_data::breakdown::breakdown;
use fce_data::dataset::{EmissionDataset, YEAR_MAX, YEAR_MIN};
use fce_data::ranking::RankTable;
use fce_data::record::parse_records;
use fce_data::selection::SelectionEvent;

/// Per-country emissions CSV (15 highest-emitting countries, 2003-2023).
const DATA_URL: &str =
    "https://raw.githubusercontent.com/bettyzzzr/fall2024-iv-final-project-data/refs/heads/main/15%E5%9B%BD%E7%A2%B3%E6%8E%92%E6%94%BE.csv";

/// Allowed deviation between the category sum and the record total,
/// as a percentage of the total.
const CATEGORY_SUM_TOLERANCE_PCT: f64 = 5.0;

/// Chart container DOM element IDs used by D3.js to render into.
const HEATMAP_ID: &str = "emissions-heatmap-chart";
const PIE_ID: &str = "emissions-pie-chart";
const LINE_ID: &str = "emissions-line-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("emissions-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: one-time setup -- chart scripts, click channel, fetch ───
    use_effect(move || {
        js_bridge::init_charts();

        // Heatmap cell clicks arrive from D3 and run through the selection
        // reducer; both fields of the selection come from the one clicked
        // cell, so the views can never see a mixed (country, year).
        let mut selection = state.selection;
        js_bridge::set_cell_click_handler(move |country, year| {
            log::info!("cell activated: {} {}", country, year);
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

    // ─── Effect 2: heatmap re-renders on dataset or metric change ───
    use_effect(move || {
        let dataset = state.dataset.read();
        let metric = (state.metric)();
        if (state.loading)() || (state.error_msg)().is_some() || dataset.is_empty() {
            return;
        }

        let rankings = RankTable::compute(&dataset);
        let countries = dataset.countries();
        let years = dataset.years();
        let cells = payload::heatmap_cells(&dataset, metric, &rankings, &countries);

        let data_json = serde_json::to_string(&cells).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "years": years,
            "countries": countries,
            "metricLabel": metric.label(),
        }))
        .unwrap_or_default();
        js_bridge::render_heatmap(HEATMAP_ID, &data_json, &config_json);
    });

    // ─── Effect 3: pie + line follow the selection ───
    use_effect(move || {
        let dataset = state.dataset.read();
        let selection = (state.selection)();
        if (state.loading)() || dataset.is_empty() {
            return;
        }

        let (country, year) = match selection.bound() {
            Some(bound) => bound,
            None => {
                js_bridge::destroy_chart(PIE_ID);
                js_bridge::destroy_chart(LINE_ID);
                return;
            }
        };

        let record = match dataset.record_for(country, year) {
            Some(record) => record,
            None => {
                // Not applicable: the selection has no backing record.
                log::warn!("no record for selection {} {}", country, year);
                js_bridge::destroy_chart(PIE_ID);
                js_bridge::destroy_chart(LINE_ID);
                return;
            }
        };

        let rankings = RankTable::compute(&dataset);
        let rank_note = rankings
            .get(country, year)
            .map(|label| format!(" (rank {})", label))
            .unwrap_or_default();

        let shares = breakdown(record);
        let pie_data = serde_json::to_string(&shares).unwrap_or_default();
        let pie_config = serde_json::to_string(&serde_json::json!({
            "title": format!("{} {} emission sources{}", country, year, rank_note),
        }))
        .unwrap_or_default();
        js_bridge::render_pie_chart(PIE_ID, &pie_data, &pie_config);

        let series = dataset.country_series(country);
        let points = payload::line_points(&series);
        let line_data = serde_json::to_string(&points).unwrap_or_default();
        let line_config = serde_json::to_string(&serde_json::json!({
            "title": format!("{}: CO2 and GDP trends", country),
            "yearMin": YEAR_MIN,
            "yearMax": YEAR_MAX,
        }))
        .unwrap_or_default();
        js_bridge::render_line_chart(LINE_ID, &line_data, &line_config);
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Fossil CO2 Analysis".to_string(),
                unit_description: "Cell size: total emissions (Mt CO2, sqrt scale). Cell color: selected metric (log scale).".to_string(),
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

                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: flex-start;",
                    div {
                        style: "flex: 3; min-width: 480px;",
                        ChartContainer {
                            id: HEATMAP_ID.to_string(),
                            loading: false,
                            min_height: 600,
                        }
                    }
                    div {
                        style: "flex: 2; min-width: 320px; display: flex; flex-direction: column; gap: 16px;",
                        if (state.selection)().is_bound() {
                            ChartContainer {
                                id: PIE_ID.to_string(),
                                loading: false,
                                min_height: 280,
                            }
                            ChartContainer {
                                id: LINE_ID.to_string(),
                                loading: false,
                                min_height: 320,
                            }
                        } else {
                            p {
                                style: "color: #666;",
                                "Click a heatmap cell to see that country's emission-source breakdown and its CO2/GDP trend."
                            }
                        }
                    }
                }
            }
        }
    }
}
