//! Reusable Dioxus RSX components for emissions chart apps.

mod chart_container;
mod chart_header;
mod clear_selection_button;
mod error_display;
mod loading_spinner;
mod metric_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use clear_selection_button::ClearSelectionButton;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use metric_selector::MetricSelector;
