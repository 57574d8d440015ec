//! JSON shapes consumed by the D3 chart scripts.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend. Ordering decisions (year ascending,
//! country by summed total) are made here in Rust; the scripts render the
//! arrays as given.

use fce_data::dataset::EmissionDataset;
use fce_data::metric::Metric;
use fce_data::ranking::RankTable;
use fce_data::record::EmissionRecord;
use serde::Serialize;

/// One heatmap cell.
///
/// `metric_value` drives the color encoding (log-scaled in the chart
/// script); `total` drives cell size (sqrt-scaled). The rank string feeds
/// the tooltip and is absent when no ranking applies.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeatmapCell {
    pub country: String,
    pub year: i32,
    pub total: f64,
    pub metric_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
}

/// A single point of a country's emission/GDP trend line.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LinePoint {
    pub year: i32,
    /// Total CO2 emissions (megatons), left axis.
    pub total: f64,
    /// GDP (billion USD), right axis.
    pub gdp: f64,
}

/// Heatmap cells for the given countries, in dataset row order.
///
/// `countries` fixes which rows appear (and lets the standalone app apply
/// its top-N filter); records outside the year domain never show up because
/// only in-domain records are considered.
pub fn heatmap_cells(
    dataset: &EmissionDataset,
    metric: Metric,
    rankings: &RankTable,
    countries: &[String],
) -> Vec<HeatmapCell> {
    dataset
        .in_domain_records()
        .into_iter()
        .filter(|r| countries.iter().any(|c| c == &r.country))
        .map(|r| HeatmapCell {
            country: r.country.clone(),
            year: r.year,
            total: r.total,
            metric_value: metric.value_of(r),
            rank: rankings.get(&r.country, r.year).map(|label| label.to_string()),
        })
        .collect()
}

/// Trend-line points for one country's series.
pub fn line_points(series: &[&EmissionRecord]) -> Vec<LinePoint> {
    series
        .iter()
        .map(|r| LinePoint {
            year: r.year,
            total: r.total,
            gdp: r.gdp,
        })
        .collect()
}
