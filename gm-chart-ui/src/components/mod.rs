//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod chart_header;
mod chart_kind_selector;
mod entity_selector;
mod error_display;
mod group_selector;
mod loading_spinner;
mod metric_selector;
mod year_slider;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use chart_kind_selector::ChartKindSelector;
pub use entity_selector::EntitySelector;
pub use error_display::ErrorDisplay;
pub use group_selector::GroupSelector;
pub use loading_spinner::LoadingSpinner;
pub use metric_selector::{MetricAxis, MetricSelector};
pub use year_slider::YearSlider;

/// Spacing around every control block.
pub(crate) const CONTROL_STYLE: &str = "margin: 20px;";
pub(crate) const LABEL_STYLE: &str = "display: block; font-weight: bold; margin-bottom: 4px;";
