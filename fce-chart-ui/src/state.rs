//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use fce_data::dataset::EmissionDataset;
use fce_data::metric::Metric;
use fce_data::selection::Selection;

/// Shared application state for the emissions chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Parsed record set (empty until the startup fetch resolves)
    pub dataset: Signal<EmissionDataset>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Metric driving the heatmap color encoding
    pub metric: Signal<Metric>,
    /// Currently selected (country, year), shared by all coordinated views
    pub selection: Signal<Selection>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(EmissionDataset::default()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            metric: Signal::new(Metric::Population),
            selection: Signal::new(Selection::Empty),
        }
    }
}
